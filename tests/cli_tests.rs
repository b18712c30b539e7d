//! Command line error paths; none of these reach the terminal UI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn subtoggle() -> Command {
    Command::cargo_bin("subtoggle").unwrap()
}

#[test]
fn test_help_lists_options() {
    subtoggle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--thing"))
        .stdout(predicate::str::contains("--cookie-jar"));
}

#[test]
fn test_missing_thing_fails() {
    subtoggle()
        .args(["--url", "/sub"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing subscription option `thing`"));
}

#[test]
fn test_missing_options_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    subtoggle()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_invalid_options_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, "{\"thing\": ").unwrap();

    subtoggle()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid subscription options"));
}

#[test]
fn test_conflicting_cookie_flags_fail() {
    subtoggle()
        .args([
            "--thing",
            "ticket",
            "--url",
            "/sub",
            "--cookie",
            "a=b",
            "--cookie-jar",
            "c.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
