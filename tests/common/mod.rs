//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// A config document carrying every field the latest templates read.
pub fn full_config() -> Value {
    json!({
        "pz_dir": "/srv/pz",
        "pz_name": "MyServer",
        "pz_admin_user": "admin",
        "pz_service": "pzserver.service",
        "pz_log_path": "/srv/pz/logs/server-console.txt",
        "pz_maintenance_log_path": "/srv/pz/logs/maintenance.log",
        "pz_ini_path": "/srv/pz/Zomboid/Server/MyServer.ini",
        "pz_save_path": "/srv/pz/Zomboid/Saves/Multiplayer/MyServer",
        "pz_steamcmd_path": "/usr/games/steamcmd",
        "pz_rcon_password": "changeme",
        "pz_rcon_port": 27015,
        "pz_rcon_host": "127.0.0.1",
        "backend_url": "http://localhost:3001/api",
        "frontend_url": "http://localhost:3000",
        "backend_port": 3001,
        "frontend_port": 3000,
        "pz_env": "/srv/pz/pz-env.sh"
    })
}

/// `full_config()` minus `keys`.
pub fn config_without(keys: &[&str]) -> Value {
    let mut config = full_config();
    let map = config.as_object_mut().expect("fixture is an object");
    for key in keys {
        map.remove(*key);
    }
    config
}

/// Write `config` as JSON into `dir` and return its path.
pub fn write_config(dir: &Path, name: &str, config: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(config).expect("serialize fixture"))
        .expect("Failed to write config fixture");
    path
}
