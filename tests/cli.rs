//! Basic CLI tests for cpad
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs. None of these reach the TUI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cpad() -> Command {
    let mut cmd = Command::cargo_bin("cpad").unwrap();
    // Keep log files out of the user's data dir
    let logs = std::env::temp_dir().join("codepad-cli-tests");
    cmd.env("XDG_DATA_HOME", &logs).env("XDG_CONFIG_HOME", &logs);
    cmd
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cpad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("cpad"))
        .stdout(predicate::str::contains("Ctrl+S"));
}

#[test]
fn help_short_flag_shows_usage() {
    cpad()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    cpad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "cpad {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn version_short_flag_shows_version() {
    cpad()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Arguments
// =============================================================================

#[test]
fn unknown_option_is_invalid() {
    cpad()
        .arg("--bogus")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option: --bogus"));
}

#[test]
fn missing_path_is_invalid() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    cpad()
        .arg(&missing)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Path does not exist"));
}

#[test]
fn second_path_is_invalid() {
    let temp = TempDir::new().unwrap();

    cpad()
        .arg(temp.path())
        .arg(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unexpected argument"));
}
