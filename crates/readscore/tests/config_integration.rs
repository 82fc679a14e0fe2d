//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("READSCORE_MAX_GRADE")
        .env_remove("READSCORE_MIN_EASE")
        .env_remove("READSCORE_LOG_LEVEL");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), "max_grade = 8.0\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["max_grade"], 8.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".readscore.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".readscore.toml"), "min_ease = 55.0\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_ease"], 55.0);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join(".readscore.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("readscore.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readscore.yaml"),
        "strip_markdown: true\nmax_input_bytes: 1024\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["strip_markdown"], true);
    assert_eq!(json["config"]["input_limit"], 1024);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readscore.json"),
        r#"{"disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["input_limit"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".readscore.toml"), "max_grade = 6.0\n").unwrap();
    fs::write(sub_dir.join(".readscore.toml"), "max_grade = 10.0\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["max_grade"], 10.0, "closer config should win");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), "max_grade = 6.0\n").unwrap();

    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "max_grade = 12.0\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_grade"], 12.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), "max_grade = 6.0\n").unwrap();

    let output = cmd()
        .env("READSCORE_MAX_GRADE", "9")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_grade"], 9.0);
}

#[test]
fn config_gate_applies_to_score() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), "max_grade = 1.0\n").unwrap();
    fs::write(
        tmp.path().join("dense.txt"),
        "Comprehensive organizational restructuring necessitated interdepartmental \
         communication protocols.",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "dense.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 1.0"));

    // A flag overrides the configured gate.
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "score",
            "dense.txt",
            "--max-grade",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn config_input_limit_applies_to_score() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), "max_input_bytes = 8\n").unwrap();
    fs::write(tmp.path().join("doc.txt"), "The cat sat on the mat.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "score", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readscore.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn wrongly_typed_value_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readscore.toml"), r#"max_grade = "eight""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readscore.toml"),
        "max_grade = 7.0\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["max_grade"], 7.0);
}

// =============================================================================
// Boundary Marker
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::write(parent.join(".readscore.toml"), "max_grade = 5.0\n").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert!(
        json["config"]["max_grade"].is_null(),
        "boundary should stop the search"
    );
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".readscore.toml"), "max_grade = 9.0\n").unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["max_grade"], 9.0);
}
