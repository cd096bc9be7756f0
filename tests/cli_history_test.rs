//! CLI tests for the invocation history log.

mod common;

use common::TestEnv;
use std::fs;

fn history_lines(env: &TestEnv) -> Vec<serde_json::Value> {
    let path = env.profiles_path().join("history.jsonl");
    if !path.exists() {
        return Vec::new();
    }
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("history line is not valid JSON"))
        .collect()
}

#[test]
fn test_successful_command_is_logged() {
    let env = TestEnv::new();
    env.write_profile("demo", r#"{"display_name": "Demo"}"#);

    env.cp().args(["show", "demo"]).assert().success();

    let entries = history_lines(&env);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["command"], "show");
    assert_eq!(entries[0]["args"]["name"], "demo");
    assert_eq!(entries[0]["success"], true);
    assert!(entries[0].get("error").is_none());
    assert!(entries[0]["duration_ms"].is_u64());
}

#[test]
fn test_failed_command_logs_error() {
    let env = TestEnv::new();

    env.cp().args(["show", "ghost"]).assert().failure();

    let entries = history_lines(&env);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["success"], false);
    assert_eq!(entries[0]["error"], "Profile not found: ghost");
}

#[test]
fn test_history_appends_across_invocations() {
    let env = TestEnv::new();
    env.write_profile("demo", r#"{"display_name": "Demo"}"#);

    env.cp().arg("list").assert().success();
    env.cp().args(["show", "demo"]).assert().success();
    env.cp().arg("detect").assert().success();

    let entries = history_lines(&env);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["command"], "list");
    assert_eq!(entries[1]["command"], "show");
    assert_eq!(entries[2]["command"], "detect");
}

#[test]
fn test_builtin_store_skips_logging() {
    let env = TestEnv::new();
    let missing = env.profiles_path().join("missing");

    // No profile directory on disk: the command still succeeds and no
    // history file appears anywhere.
    env.cp()
        .env("CLAUDE_PROFILES_DIR", &missing)
        .arg("list")
        .assert()
        .success();

    assert!(!missing.exists());
}
