//! CLI argument definitions for claude-profiles.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// claude-profiles - Scaffold Claude Code configuration by project stack.
///
/// Start with `claude-profiles detect` to see what kind of project a
/// directory holds, then `claude-profiles apply auto` to scaffold it.
#[derive(Parser, Debug)]
#[command(name = "claude-profiles")]
#[command(author, version, about = "Scaffold Claude Code configuration by project stack", long_about = None)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("CP_GIT_COMMIT"), ", built ", env!("CP_BUILD_TIMESTAMP"), ")"
))]
pub struct Cli {
    /// Output in JSON format instead of human-readable text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the project stack(s) present in a directory
    ///
    /// Scans for marker files (Cargo.toml, package.json, pom.xml, ...) and
    /// reports every matching stack, most specific first.
    Detect {
        /// Project directory to inspect.
        /// Can also be set via CLAUDE_PROFILES_TARGET environment variable.
        #[arg(short = 'd', long = "directory", default_value = ".", env = "CLAUDE_PROFILES_TARGET")]
        directory: PathBuf,
    },

    /// List available profiles
    List,

    /// Show the detail of a profile (MCP servers, variants, rules, skills)
    Show {
        /// Profile name
        name: String,
    },

    /// Apply a profile to a project directory
    Apply {
        /// Profile name, or 'auto' to detect it
        name: String,

        /// Specific variant (e.g. gradle, maven)
        #[arg(short = 'v', long)]
        variant: Option<String>,

        /// Project directory to scaffold.
        /// Can also be set via CLAUDE_PROFILES_TARGET environment variable.
        #[arg(short = 'd', long = "directory", default_value = ".", env = "CLAUDE_PROFILES_TARGET")]
        directory: PathBuf,

        /// Print the plan without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize the builtin profiles in the user profile directory
    Init {
        /// Overwrite an existing profile directory
        #[arg(long)]
        force: bool,
    },

    /// Compare the current configuration of a directory against a profile
    Diff {
        /// Profile name, or 'auto' to detect it
        name: String,

        /// Project directory to compare.
        /// Can also be set via CLAUDE_PROFILES_TARGET environment variable.
        #[arg(short = 'd', long = "directory", default_value = ".", env = "CLAUDE_PROFILES_TARGET")]
        directory: PathBuf,
    },
}
