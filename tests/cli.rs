//! CLI integration tests.
//!
//! These stay offline: they exercise argument handling, setup errors, and
//! the empty-walk paths. Anything that needs a live parameter store is
//! covered by the in-memory store in the unit tests.

use assert_cmd::Command;
use predicates::prelude::*;

/// Base command with a pinned region so the AWS config loader never probes
/// the instance metadata service, and without ambient PARAMETER* defaults.
fn ssmenv() -> Command {
    let mut cmd = Command::cargo_bin("ssmenv").unwrap();
    cmd.env("AWS_REGION", "us-east-1")
        .env("AWS_EC2_METADATA_DISABLED", "true");
    for (key, _) in std::env::vars() {
        if key.starts_with("PARAMETER") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("OUTPUT")
        .env_remove("STYLE")
        .env_remove("RECURSIVE");
    cmd
}

#[test]
fn test_help_lists_styles() {
    ssmenv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--style"))
        .stdout(predicate::str::contains("dotenv"));
}

#[test]
fn test_version() {
    ssmenv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ssmenv"));
}

#[test]
fn test_unknown_style_rejected() {
    ssmenv()
        .args(["--style", "yaml", "/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_empty_path_is_fatal() {
    ssmenv()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("the path is not specified"));
}

#[test]
fn test_no_paths_walks_nothing() {
    ssmenv()
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_style_requires_output() {
    ssmenv()
        .args(["--style", "file", "/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_completions_bash() {
    ssmenv()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ssmenv"));
}
