// ABOUTME: Integration tests for the selida CLI commands.
// ABOUTME: Validates --help output and init command behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn selida_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("selida"))
}

#[test]
fn help_shows_commands() {
    selida_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("cancel"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("selida.yml");

    selida_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--repository", "octo/site"])
        .assert()
        .success();

    assert!(config_path.exists(), "selida.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(
        content.contains("repository: octo/site"),
        "config should carry the repository"
    );
    assert!(content.contains("poll:"), "config should have a poll policy");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("selida.yml");

    fs::write(&config_path, "existing: config").unwrap();

    selida_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn deploy_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    selida_cmd()
        .current_dir(temp_dir.path())
        .args([
            "deploy",
            "--artifact-url",
            "https://artifacts.example/abc",
            "--build-version",
            "v1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn deploy_requires_artifact_url() {
    selida_cmd()
        .args(["deploy", "--build-version", "v1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--artifact-url"));
}
