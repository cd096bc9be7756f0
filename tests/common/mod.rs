//! Common test utilities for claude-profiles integration tests.
//!
//! Provides `TestEnv` for isolated test environments that never touch the
//! user's `~/.claude-profiles` directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
pub use tempfile::TempDir;

/// A test environment with an isolated project directory and profile store.
///
/// Each `TestEnv` creates two temporary directories:
/// - `project_dir`: acts as the project being scaffolded
/// - `profiles_dir`: holds the profile store (via `CLAUDE_PROFILES_DIR`)
///
/// The `cp()` method returns a `Command` that sets `CLAUDE_PROFILES_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub project_dir: TempDir,
    pub profiles_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            project_dir: TempDir::new().unwrap(),
            profiles_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment with the builtin profiles materialized.
    pub fn with_builtins() -> Self {
        let env = Self::new();
        // The store directory already exists as a TempDir, hence --force.
        env.cp().args(["init", "--force"]).assert().success();
        env
    }

    /// Get a Command for the claude-profiles binary with an isolated store.
    pub fn cp(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_claude-profiles"));
        cmd.current_dir(self.project_dir.path());
        cmd.env("CLAUDE_PROFILES_DIR", self.profiles_dir.path());
        cmd
    }

    /// Write a profile document into the isolated store.
    pub fn write_profile(&self, name: &str, document: &str) {
        fs::write(
            self.profiles_dir.path().join(format!("{name}.json")),
            document,
        )
        .unwrap();
    }

    /// Create an empty file (and its parents) inside the project directory.
    pub fn touch(&self, name: &str) {
        self.write_file(name, "");
    }

    /// Write a file (and its parents) inside the project directory.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.project_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file from the project directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.project_dir.path().join(name)).unwrap()
    }

    /// Get the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Get the path to the profile store directory.
    pub fn profiles_path(&self) -> &Path {
        self.profiles_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse JSON output from a command.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}
