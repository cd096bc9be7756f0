//! Configuration diffing.
//!
//! Compares an effective configuration's declared artifacts against what a
//! project directory already has. Pure set difference by name: an existing
//! rule file with stale content is not flagged. Read-only.

use crate::profile::EffectiveConfig;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// State of the on-disk MCP manifest relative to the profile.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum McpState {
    /// No readable `.mcp.json` at all — distinct from present-but-empty,
    /// where every declared server shows up as missing.
    Absent,
    /// Manifest present; name-level differences against the profile.
    Present {
        /// Declared by the profile, absent on disk
        missing: Vec<String>,
        /// Present on disk, not declared by the profile (user additions)
        extra: Vec<String>,
    },
}

/// Name-level differences between a profile and a project directory.
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    pub mcp: McpState,
    /// Rule names declared by the profile with no `.claude/rules/<name>.md`
    pub missing_rules: Vec<String>,
    /// Skill names declared by the profile with no `.claude/skills/<name>/`
    pub missing_skills: Vec<String>,
}

impl DiffReport {
    /// True when the manifest is present and nothing is missing or extra.
    pub fn is_clean(&self) -> bool {
        let mcp_clean = matches!(
            &self.mcp,
            McpState::Present { missing, extra } if missing.is_empty() && extra.is_empty()
        );
        mcp_clean && self.missing_rules.is_empty() && self.missing_skills.is_empty()
    }
}

/// Compare an effective configuration against a project directory.
pub fn diff(config: &EffectiveConfig, directory: &Path) -> DiffReport {
    DiffReport {
        mcp: diff_mcp(config, directory),
        missing_rules: missing_rules(config, directory),
        missing_skills: missing_skills(config, directory),
    }
}

fn diff_mcp(config: &EffectiveConfig, directory: &Path) -> McpState {
    let manifest = fs::read_to_string(directory.join(".mcp.json"))
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(&text).ok());
    let Some(manifest) = manifest else {
        return McpState::Absent;
    };

    let current: BTreeSet<String> = manifest
        .get("mcpServers")
        .and_then(Value::as_object)
        .map(|servers| servers.keys().cloned().collect())
        .unwrap_or_default();
    let declared: BTreeSet<String> = config.mcp_servers.keys().cloned().collect();

    McpState::Present {
        missing: declared.difference(&current).cloned().collect(),
        extra: current.difference(&declared).cloned().collect(),
    }
}

fn missing_rules(config: &EffectiveConfig, directory: &Path) -> Vec<String> {
    let rules_dir = directory.join(".claude").join("rules");
    config
        .rules
        .keys()
        .filter(|name| !rules_dir.join(format!("{name}.md")).is_file())
        .cloned()
        .collect()
}

fn missing_skills(config: &EffectiveConfig, directory: &Path) -> Vec<String> {
    let skills_dir = directory.join(".claude").join("skills");
    config
        .skills
        .keys()
        .filter(|name| !skills_dir.join(name).is_dir())
        .cloned()
        .collect()
}
