//! claude-profiles - Claude Code configuration scaffolding by project stack.
//!
//! This library provides the core functionality for the `claude-profiles`
//! CLI tool: stack detection from marker files, profile loading, base +
//! variant merging, artifact planning/writing, and configuration diffing.

pub mod action_log;
pub mod apply;
pub mod cli;
pub mod commands;
pub mod detect;
pub mod diff;
pub mod profile;
pub mod store;

use std::path::PathBuf;

/// Library-level error type for claude-profiles operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Could not detect the project type")]
    DetectionFailed,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for claude-profiles operations.
pub type Result<T> = std::result::Result<T, Error>;
