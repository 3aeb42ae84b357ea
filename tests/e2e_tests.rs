//! End-to-end tests for the Dynamite countdown CLI binary.
//!
//! These tests exercise the installed binary surface:
//! - help and version output
//! - completion generation
//! - input validation (negative and non-numeric durations)
//! - error paths when no daemon is running

use assert_cmd::Command;
use predicates::prelude::*;

fn dynamite() -> Command {
    Command::cargo_bin("dynamite").unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_no_args_prints_help() {
    dynamite()
        .assert()
        .success()
        .stdout(predicate::str::contains("countdown timer"));
}

#[test]
fn test_help_lists_commands() {
    dynamite()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("reset"))
        .stdout(predicate::str::contains("pause"))
        .stdout(predicate::str::contains("mute"))
        .stdout(predicate::str::contains("daemon"));
}

#[test]
fn test_version() {
    dynamite()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamite"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    dynamite()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamite"));
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_set_rejects_negative_duration() {
    // Negative input is rejected before any command reaches a daemon
    dynamite()
        .args(["set", "--seconds", "-5"])
        .assert()
        .failure();
}

#[test]
fn test_set_rejects_non_numeric_duration() {
    dynamite()
        .args(["set", "--minutes", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand_fails() {
    dynamite().arg("explode").assert().failure();
}

// ============================================================================
// Daemon-absent error paths
// ============================================================================

#[test]
fn test_quit_without_daemon_reports_error() {
    // Point the client at a home with no socket; quit is unretried so the
    // failure is fast
    let home = tempfile::tempdir().unwrap();

    dynamite()
        .env("HOME", home.path())
        .arg("quit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
