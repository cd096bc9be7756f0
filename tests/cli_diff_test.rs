//! CLI tests for `claude-profiles diff`.

mod common;

use common::{TestEnv, parse_json};
use predicates::prelude::*;

const DEMO_PROFILE: &str = r#"{
  "display_name": "Demo",
  "description": "A demo stack",
  "mcp_servers": {
    "alpha": {"type": "stdio", "command": "alpha-server"},
    "beta": {"type": "stdio", "command": "beta-server"}
  },
  "claude_md": "Demo instructions.",
  "rules": {"style": "Keep it simple."},
  "skills": {"review": "Look carefully."}
}"#;

fn demo_env() -> TestEnv {
    let env = TestEnv::new();
    env.write_profile("demo", DEMO_PROFILE);
    env
}

#[test]
fn test_diff_reports_absent_manifest() {
    let env = demo_env();

    env.cp()
        .args(["diff", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".mcp.json absent"))
        .stdout(predicate::str::contains("Missing rules:"))
        .stdout(predicate::str::contains("- style.md"))
        .stdout(predicate::str::contains("Missing skills:"))
        .stdout(predicate::str::contains("- /review"));
}

#[test]
fn test_diff_after_apply_is_clean() {
    let env = demo_env();
    env.cp().args(["apply", "demo"]).assert().success();

    env.cp()
        .args(["diff", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP servers: OK"))
        .stdout(predicate::str::contains("Configuration matches the profile."));
}

#[test]
fn test_diff_reports_extra_servers() {
    let env = demo_env();
    env.cp().args(["apply", "demo"]).assert().success();

    // A user customization the profile doesn't know about.
    env.write_file(
        ".mcp.json",
        r#"{"mcpServers": {"alpha": {}, "beta": {}, "custom": {}}}"#,
    );

    env.cp()
        .args(["diff", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extra MCP servers"))
        .stdout(predicate::str::contains("+ custom"));
}

#[test]
fn test_diff_reports_missing_servers() {
    let env = demo_env();
    env.cp().args(["apply", "demo"]).assert().success();

    env.write_file(".mcp.json", r#"{"mcpServers": {"beta": {}}}"#);

    env.cp()
        .args(["diff", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing MCP servers"))
        .stdout(predicate::str::contains("- alpha"));
}

#[test]
fn test_diff_empty_manifest_is_not_absent() {
    let env = demo_env();
    env.write_file(".mcp.json", r#"{"mcpServers": {}}"#);

    env.cp()
        .args(["diff", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".mcp.json absent").not())
        .stdout(predicate::str::contains("Missing MCP servers"));
}

#[test]
fn test_diff_auto_detects_stack() {
    let env = TestEnv::new();
    env.write_profile("rust", DEMO_PROFILE);
    env.write_file("Cargo.toml", "[package]");

    env.cp()
        .args(["diff", "auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing against profile 'rust'"));
}

#[test]
fn test_diff_auto_without_markers_fails() {
    let env = demo_env();

    env.cp()
        .args(["diff", "auto"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not detect"));
}

#[test]
fn test_diff_unknown_profile_fails() {
    let env = demo_env();

    env.cp()
        .args(["diff", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Profile not found: ghost"));
}

#[test]
fn test_diff_json_output() {
    let env = demo_env();

    let output = env.cp().args(["diff", "demo", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value = parse_json(&output.stdout);
    assert_eq!(value["profile"], "demo");
    assert_eq!(value["mcp"]["state"], "absent");
    assert_eq!(value["missing_rules"][0], "style");
    assert_eq!(value["missing_skills"][0], "review");
}
