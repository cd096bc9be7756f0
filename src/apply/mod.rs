//! Artifact planning and writing.
//!
//! Applying a profile is split into `plan` (list every filesystem action
//! the apply would take) and `execute` (perform them). Dry-run callers
//! print the plan and skip `execute`. Each write is independent and
//! idempotent; a failure mid-sequence propagates and leaves the artifacts
//! already written in place.

use crate::Result;
use crate::profile::EffectiveConfig;
use serde::Serialize;
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Lines appended to .gitignore for machine-local files.
const GITIGNORE_ENTRIES: &[&str] = &[".claude/settings.local.json", ".claude/CLAUDE.local.md"];

/// Comment header written above appended .gitignore entries.
const GITIGNORE_HEADER: &str = "# Claude Code (local)";

/// One planned filesystem action. Paths are relative to the target
/// directory.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CreateDir { path: String },
    WriteMcpManifest { path: String, servers: Vec<String> },
    BackupFile { path: String, backup: String },
    WriteClaudeMd { path: String },
    WriteRule { name: String, path: String },
    WriteSkill { name: String, path: String },
    WriteSettings { path: String },
    AppendGitignore { entries: Vec<String> },
}

impl Action {
    /// Human-readable plan line, matching the on-apply output.
    pub fn describe(&self) -> String {
        match self {
            Action::CreateDir { path } => format!("+ mkdir {path}/"),
            Action::WriteMcpManifest { path, servers } => {
                let mut line = format!(
                    "+ {path} ({} MCP server{})",
                    servers.len(),
                    if servers.len() == 1 { "" } else { "s" }
                );
                for server in servers {
                    line.push_str(&format!("\n      - {server}"));
                }
                line
            }
            Action::BackupFile { path, backup } => {
                format!("~ {path} exists, backing up to {backup}")
            }
            Action::WriteClaudeMd { path } => format!("+ {path}"),
            Action::WriteRule { path, .. } => format!("+ {path}"),
            Action::WriteSkill { path, .. } => format!("+ {path}"),
            Action::WriteSettings { path } => format!("+ {path}"),
            Action::AppendGitignore { entries } => {
                format!(
                    "+ .gitignore ({} entr{})",
                    entries.len(),
                    if entries.len() == 1 { "y" } else { "ies" }
                )
            }
        }
    }
}

/// Plan the filesystem actions needed to apply `config` to `directory`.
///
/// Read-only: inspects existing state to decide which directories need
/// creating, whether CLAUDE.md needs a backup, and which .gitignore
/// entries are still missing.
pub fn plan(config: &EffectiveConfig, directory: &Path) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for dir in [".claude/rules", ".claude/skills"] {
        if !directory.join(dir).is_dir() {
            actions.push(Action::CreateDir {
                path: dir.to_string(),
            });
        }
    }

    if !config.mcp_servers.is_empty() {
        actions.push(Action::WriteMcpManifest {
            path: ".mcp.json".to_string(),
            servers: config.mcp_servers.keys().cloned().collect(),
        });
    }

    if !config.claude_md.is_empty() {
        let claude_md = ".claude/CLAUDE.md";
        if directory.join(claude_md).exists() {
            actions.push(Action::BackupFile {
                path: claude_md.to_string(),
                backup: ".claude/CLAUDE.md.bak".to_string(),
            });
        }
        actions.push(Action::WriteClaudeMd {
            path: claude_md.to_string(),
        });
    }

    for name in config.rules.keys() {
        actions.push(Action::WriteRule {
            name: name.clone(),
            path: format!(".claude/rules/{name}.md"),
        });
    }

    for name in config.skills.keys() {
        actions.push(Action::WriteSkill {
            name: name.clone(),
            path: format!(".claude/skills/{name}/SKILL.md"),
        });
    }

    if !config.settings.is_empty() {
        actions.push(Action::WriteSettings {
            path: ".claude/settings.json".to_string(),
        });
    }

    let gitignore_path = directory.join(".gitignore");
    let existing = if gitignore_path.exists() {
        fs::read_to_string(&gitignore_path)?
    } else {
        String::new()
    };
    let entries: Vec<String> = GITIGNORE_ENTRIES
        .iter()
        .filter(|entry| !existing.contains(**entry))
        .map(|entry| entry.to_string())
        .collect();
    if !entries.is_empty() {
        actions.push(Action::AppendGitignore { entries });
    }

    Ok(actions)
}

/// Execute a plan against `directory`.
///
/// Write failures propagate as fatal; there is no rollback of artifacts
/// already written.
pub fn execute(config: &EffectiveConfig, directory: &Path, actions: &[Action]) -> Result<()> {
    for action in actions {
        match action {
            Action::CreateDir { path } => {
                fs::create_dir_all(directory.join(path))?;
            }
            Action::WriteMcpManifest { path, .. } => {
                let manifest = json!({ "mcpServers": config.mcp_servers });
                let text = serde_json::to_string_pretty(&manifest)?;
                fs::write(directory.join(path), format!("{text}\n"))?;
            }
            Action::BackupFile { path, backup } => {
                fs::copy(directory.join(path), directory.join(backup))?;
            }
            Action::WriteClaudeMd { path } => {
                fs::write(directory.join(path), format!("{}\n", config.claude_md))?;
            }
            Action::WriteRule { name, path } => {
                if let Some(text) = config.rules.get(name) {
                    fs::write(directory.join(path), format!("{text}\n"))?;
                }
            }
            Action::WriteSkill { name, path } => {
                let target = directory.join(path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                if let Some(text) = config.skills.get(name) {
                    fs::write(target, format!("{text}\n"))?;
                }
            }
            Action::WriteSettings { path } => {
                let text = serde_json::to_string_pretty(&config.settings)?;
                fs::write(directory.join(path), format!("{text}\n"))?;
            }
            Action::AppendGitignore { entries } => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(directory.join(".gitignore"))?;
                writeln!(file, "\n{GITIGNORE_HEADER}")?;
                for entry in entries {
                    writeln!(file, "{entry}")?;
                }
            }
        }
    }
    Ok(())
}
