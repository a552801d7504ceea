//! Paths resolved relative to the running executable rather than the
//! caller's working directory.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name of the config document looked up next to the tool.
pub const DEFAULT_CONFIG_FILE: &str = "config.template.json";

/// Directory containing the running executable, symlinks resolved.
pub fn tool_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to resolve the executable path")?;
    let exe = exe.canonicalize().or_else(|e| match e.kind() {
        io::ErrorKind::NotFound => Ok(exe.clone()),
        _ => Err(e),
    })?;

    exe.parent()
        .map(PathBuf::from)
        .context("Executable path has no parent directory")
}

/// `<tool dir>/config.template.json`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(tool_dir()?.join(DEFAULT_CONFIG_FILE))
}

/// Parent of the tool directory, so a tool kept in `scripts/` writes
/// `backend/` and `frontend/` beside it.
pub fn default_output_dir() -> Result<PathBuf> {
    let dir = tool_dir()?;
    Ok(dir.parent().map_or_else(|| dir.clone(), PathBuf::from))
}
