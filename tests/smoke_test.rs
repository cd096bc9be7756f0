//! Basic smoke tests for the claude-profiles binary.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let env = TestEnv::new();

    env.cp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffold Claude Code configuration"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("diff"));
}

#[test]
fn test_no_arguments_prints_help() {
    let env = TestEnv::new();

    env.cp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();

    env.cp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_subcommand_help() {
    let env = TestEnv::new();

    env.cp()
        .args(["apply", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--variant"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();

    env.cp().arg("bogus").assert().failure();
}
