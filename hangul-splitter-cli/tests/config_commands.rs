//! Integration tests for the generate-config and validate commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn hangul_split() -> Command {
    Command::cargo_bin("hangul-split").unwrap()
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hangul.toml");

    hangul_split()
        .args(["generate-config", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[split]"));
    assert!(content.contains("[filter]"));
    assert!(content.contains("[output]"));

    hangul_split()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid!"))
        .stdout(predicate::str::contains("split.split_complex_letters: true"));
}

#[test]
fn test_generate_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hangul.toml");
    fs::write(&config_path, "[split]\n").unwrap();

    hangul_split()
        .args(["generate-config", "-o"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    hangul_split()
        .args(["generate-config", "--force", "-o"])
        .arg(&config_path)
        .assert()
        .success();
}

#[test]
fn test_validate_reports_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[split]\nsplit_everything = true\n").unwrap();

    hangul_split()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_validate_reports_bad_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    hangul_split()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .failure();
}

#[test]
fn test_validate_missing_file() {
    hangul_split()
        .args(["validate", "-c", "/nonexistent/hangul.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}
