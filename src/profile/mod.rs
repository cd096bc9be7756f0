//! Profile documents and their merged form.
//!
//! A [`Profile`] is the on-disk template for one technology stack: the MCP
//! servers, rules, skills, settings, and CLAUDE.md text to scaffold, plus
//! named [`VariantOverride`]s (e.g. maven vs gradle within java). Merging a
//! profile with a variant produces an [`EffectiveConfig`], the fully
//! resolved artifact set that gets written to disk or diffed against it.

pub mod merge;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A named scaffolding template for one technology stack.
///
/// Loaded fresh from JSON on every invocation; never cached or mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Human-facing name (e.g. "Rust")
    #[serde(default)]
    pub display_name: String,

    /// One-line description of the stack
    #[serde(default)]
    pub description: String,

    /// MCP server configurations, keyed by server name
    #[serde(default)]
    pub mcp_servers: BTreeMap<String, Value>,

    /// CLAUDE.md body text (may be empty)
    #[serde(default)]
    pub claude_md: String,

    /// Rule documents, keyed by rule name (written as `.claude/rules/<name>.md`)
    #[serde(default)]
    pub rules: BTreeMap<String, String>,

    /// Skill documents, keyed by skill name (written as `.claude/skills/<name>/SKILL.md`)
    #[serde(default)]
    pub skills: BTreeMap<String, String>,

    /// settings.json tree
    #[serde(default)]
    pub settings: serde_json::Map<String, Value>,

    /// Variant overrides, keyed by variant name.
    /// Keys are independent of `rules`/`skills` keys.
    #[serde(default)]
    pub variants: BTreeMap<String, VariantOverride>,
}

/// Overrides layered onto a base profile when a variant is selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantOverride {
    /// Additional or replacement MCP servers, merged by key (variant wins)
    #[serde(default)]
    pub mcp_servers: BTreeMap<String, Value>,

    /// Server names removed after additions. Exclusion always wins, even
    /// over a server this same variant adds.
    #[serde(default)]
    pub exclude_mcps: Vec<String>,

    /// Text appended to the base claude_md, blank-line separated
    #[serde(default)]
    pub claude_md_append: String,

    /// Additional or replacement rules, merged by key
    #[serde(default)]
    pub rules: BTreeMap<String, String>,

    /// Additional or replacement skills, merged by key
    #[serde(default)]
    pub skills: BTreeMap<String, String>,

    /// One-level-deep settings merge: for each top-level key, object values
    /// merge their entries (override wins), anything else is replaced.
    #[serde(default)]
    pub settings_merge: serde_json::Map<String, Value>,
}

/// The fully merged artifact set for one (profile, variant) selection.
///
/// Self-contained: carries no `variants` field and no reference to the
/// variant name. Built once per apply/diff/show invocation and discarded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EffectiveConfig {
    pub mcp_servers: BTreeMap<String, Value>,
    pub claude_md: String,
    pub rules: BTreeMap<String, String>,
    pub skills: BTreeMap<String, String>,
    pub settings: serde_json::Map<String, Value>,
}
