//! CLI integration tests for the pzenv binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

use common::{config_without, full_config, temp_dir, write_config};

// ============================================================
// Helper functions
// ============================================================

/// Build an `assert_cmd::Command` for the `pzenv` binary, run from `dir`.
fn pzenv_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pzenv"));
    cmd.current_dir(dir);
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.as_ref().display()))
}

// ============================================================
// Success paths
// ============================================================

#[test]
fn writes_backend_and_frontend_env_files() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout("✅ [OK] - Environment Setup Completed\n");

    let backend = read(out.join("backend/.env"));
    let frontend = read(out.join("frontend/.env.local"));

    assert!(backend.lines().any(|l| l == "PZ_NAME=MyServer"));
    assert!(backend.lines().any(|l| l == "PZ_RCON_PORT=27015"));
    assert!(backend.lines().any(|l| l == "PORT=3001"));
    assert!(backend.lines().any(|l| l == "PZ_ENV_SCRIPT=/srv/pz/pz-env.sh"));
    assert!(frontend.lines().any(|l| l == "NEXT_PUBLIC_PZ_NAME=MyServer"));
    assert!(frontend.lines().any(|l| l == "NEXT_PUBLIC_API_URL=http://localhost:3001/api"));
    assert!(frontend.lines().any(|l| l == "NEXT_PUBLIC_FE_PORT=3000"));
    assert!(backend.ends_with('\n'));
    assert!(frontend.ends_with('\n'));
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");

    let run = || {
        pzenv_cmd(tmp.path())
            .arg(&config)
            .arg("--output-dir")
            .arg(&out)
            .assert()
            .success();
        (
            fs::read(out.join("backend/.env")).unwrap(),
            fs::read(out.join("frontend/.env.local")).unwrap(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn overwrites_existing_env_files() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");
    fs::create_dir_all(out.join("backend")).unwrap();
    fs::write(out.join("backend/.env"), "STALE=1\n".repeat(100)).unwrap();

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let backend = read(out.join("backend/.env"));
    assert!(!backend.contains("STALE"));
    assert!(backend.starts_with("PORT=3001\n"));
}

#[test]
fn revision_v1_accepts_config_without_ports() {
    let tmp = temp_dir();
    let config = write_config(
        tmp.path(),
        "config.json",
        &config_without(&["backend_port", "frontend_port", "pz_env"]),
    );
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .args(["--revision", "v1", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let backend = read(out.join("backend/.env"));
    assert_eq!(backend.lines().count(), 12);
    assert!(backend.starts_with("PZ_DIR=/srv/pz\n"));
    assert!(!backend.contains("PORT=3001"));
}

#[test]
fn yaml_config_is_accepted() {
    let tmp = temp_dir();
    let yaml = serde_yaml::to_string(&full_config()).unwrap();
    let config = tmp.path().join("config.yaml");
    fs::write(&config, yaml).unwrap();
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(read(out.join("backend/.env")).contains("PZ_NAME=MyServer\n"));
}

#[test]
fn settings_file_controls_paths() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("deploy");
    let settings = tmp.path().join("pzenv.yaml");
    fs::write(
        &settings,
        format!(
            "output_dir: {}\nfrontend_file: web/.env.production\n",
            out.display()
        ),
    )
    .unwrap();

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success();

    assert!(out.join("backend/.env").is_file());
    assert!(out.join("web/.env.production").is_file());
    assert!(!out.join("frontend/.env.local").exists());
}

#[test]
fn default_config_is_found_next_to_executable() {
    let tmp = temp_dir();
    let scripts = tmp.path().join("scripts");
    let elsewhere = tmp.path().join("elsewhere");
    fs::create_dir_all(&scripts).unwrap();
    fs::create_dir_all(&elsewhere).unwrap();

    let built = Path::new(env!("CARGO_BIN_EXE_pzenv"));
    let exe = scripts.join(built.file_name().unwrap());
    fs::copy(built, &exe).unwrap();
    write_config(&scripts, "config.template.json", &full_config());

    Command::new(&exe)
        .current_dir(&elsewhere)
        .assert()
        .success()
        .stdout("✅ [OK] - Environment Setup Completed\n");

    // Output root is the parent of the executable's directory
    assert!(read(tmp.path().join("backend/.env")).contains("PZ_NAME=MyServer\n"));
    assert!(read(tmp.path().join("frontend/.env.local")).contains("NEXT_PUBLIC_PZ_NAME=MyServer\n"));
    assert!(!elsewhere.join("backend").exists());
    assert!(!scripts.join("backend").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ [OK] - Dry run: 2 env file(s) rendered"));

    assert!(!out.exists());
}

#[test]
fn json_status_reports_files() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");

    let stdout = pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(stdout.iter().filter(|b| **b == b'\n').count(), 1);
    let status: Value = serde_json::from_slice(&stdout).expect("stdout should be JSON");
    assert_eq!(status["success"], true);
    assert_eq!(status["report"]["revision"], "v2");
    assert_eq!(status["report"]["files"][0]["target"], "backend");
    assert_eq!(status["report"]["files"][0]["lines"], 14);
    assert_eq!(status["report"]["files"][1]["target"], "frontend");
    assert_eq!(status["report"]["files"][1]["lines"], 6);
}

// ============================================================
// Failure paths
// ============================================================

#[test]
fn missing_explicit_config_exits_1() {
    let tmp = temp_dir();
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg("nope.json")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("❌ [ERROR] - Config file not found: nope.json"));

    assert!(!out.exists());
}

#[test]
fn missing_default_config_exits_1() {
    let tmp = temp_dir();

    // No argument, and nothing next to the test binary's target directory
    pzenv_cmd(tmp.path())
        .arg("--output-dir")
        .arg(tmp.path().join("out"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ [ERROR] - Config file not found:"))
        .stdout(predicate::str::contains("config.template.json"));
}

#[test]
fn default_config_ignores_working_directory() {
    let tmp = temp_dir();
    // A default-named file in the cwd must not be picked up
    write_config(tmp.path(), "config.template.json", &full_config());

    pzenv_cmd(tmp.path())
        .arg("--output-dir")
        .arg(tmp.path().join("out"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Config file not found"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn malformed_config_fails() {
    let tmp = temp_dir();
    let config = tmp.path().join("config.json");
    fs::write(&config, "{ \"pz_name\": ").unwrap();
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains("❌ [ERROR] - Failed to parse config file"));

    assert!(!out.exists());
}

#[test]
fn missing_backend_field_writes_nothing() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &config_without(&["pz_rcon_host"]));
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains("pz_rcon_host"))
        .stdout(predicate::str::starts_with("❌ [ERROR]"));

    assert!(!out.join("backend/.env").exists());
    assert!(!out.join("frontend/.env.local").exists());
}

#[test]
fn missing_frontend_field_keeps_backend_file() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &config_without(&["frontend_url"]));
    let out = tmp.path().join("out");

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Missing required field 'frontend_url' for frontend env",
        ));

    assert!(out.join("backend/.env").is_file());
    assert!(!out.join("frontend/.env.local").exists());
}

#[test]
fn v2_rejects_config_without_ports() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &config_without(&["backend_port"]));

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--output-dir")
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("backend_port"));
}

#[test]
fn missing_settings_file_fails() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());

    pzenv_cmd(tmp.path())
        .arg(&config)
        .args(["--settings", "absent.yaml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Settings file not found"));
}

#[test]
fn settings_aliasing_backend_path_fails_before_writing() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");
    let settings = tmp.path().join("pzenv.yaml");
    fs::write(&settings, "frontend_file: ./backend/.env\n").unwrap();

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("resolve to the same path"));

    assert!(!out.exists());
}

#[test]
fn settings_escaping_frontend_path_fails_before_writing() {
    let tmp = temp_dir();
    let config = write_config(tmp.path(), "config.json", &full_config());
    let out = tmp.path().join("out");
    let settings = tmp.path().join("pzenv.yaml");
    fs::write(&settings, "frontend_file: ../frontend/.env.local\n").unwrap();

    pzenv_cmd(tmp.path())
        .arg(&config)
        .arg("--settings")
        .arg(&settings)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ [ERROR] - Invalid settings"))
        .stdout(predicate::str::contains("parent directory components are not allowed"));

    assert!(!out.join("backend/.env").exists());
    assert!(!tmp.path().join("frontend/.env.local").exists());
}

#[test]
fn json_error_status() {
    let tmp = temp_dir();

    let stdout = pzenv_cmd(tmp.path())
        .args(["missing.json", "--json"])
        .arg("--output-dir")
        .arg(tmp.path().join("out"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let status: Value = serde_json::from_slice(&stdout).expect("stdout should be JSON");
    assert_eq!(status["success"], false);
    assert!(status["message"]
        .as_str()
        .unwrap()
        .contains("Config file not found"));
}
