//! Command implementations for the claude-profiles CLI.
//!
//! Each command returns a serializable result struct; `main` prints it as
//! JSON (`--json`) or through the [`Output`] trait's human rendering.

use crate::apply::{self, Action};
use crate::detect::variant::resolve_variant;
use crate::diff::{DiffReport, McpState};
use crate::profile::merge::merge;
use crate::store::{self, ProfileStore};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;
use std::path::Path;

/// A command result that can be printed as JSON or human-readable text.
pub trait Output: Serialize {
    /// Format for human-readable output.
    fn human(&self) -> String;
}

// ---------------------------------------------------------------- detect

/// One detected stack with its resolved variant.
#[derive(Debug, Serialize)]
pub struct DetectedStack {
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Result of `claude-profiles detect`.
#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub directory: String,
    pub detected: Vec<DetectedStack>,
    /// Suggested apply invocation when exactly one stack matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Detect the project stack(s) in a directory.
pub fn detect(directory: &Path) -> Result<DetectResult> {
    let pairs = crate::detect::detect(directory)?;
    let detected: Vec<DetectedStack> = pairs
        .into_iter()
        .map(|(stack, variant)| {
            let variant = variant.or_else(|| resolve_variant(&stack, directory));
            DetectedStack { stack, variant }
        })
        .collect();

    let suggestion = match detected.as_slice() {
        [only] => Some(match &only.variant {
            Some(v) => format!("claude-profiles apply {} --variant {v}", only.stack),
            None => format!("claude-profiles apply {}", only.stack),
        }),
        _ => None,
    };

    Ok(DetectResult {
        directory: directory.display().to_string(),
        detected,
        suggestion,
    })
}

impl Output for DetectResult {
    fn human(&self) -> String {
        if self.detected.is_empty() {
            return "No project type detected in this directory.\n\
                    Use `claude-profiles list` to see available profiles."
                .to_string();
        }

        let mut out = String::from("Detected projects:\n");
        for entry in &self.detected {
            match &entry.variant {
                Some(v) => writeln!(out, "  > {} ({v})", entry.stack),
                None => writeln!(out, "  > {}", entry.stack),
            }
            .ok();
        }
        if let Some(suggestion) = &self.suggestion {
            writeln!(out, "\nApply with: {suggestion}").ok();
        }
        out.trim_end().to_string()
    }
}

// ------------------------------------------------------------------ list

/// One profile in a `list` result.
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub variants: Vec<String>,
    /// Set when the document exists but failed to parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

/// Result of `claude-profiles list`.
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub location: String,
    pub profiles: Vec<ProfileSummary>,
}

/// List every available profile.
pub fn list() -> Result<ListResult> {
    let store = ProfileStore::open();
    let mut profiles = Vec::new();
    for name in store.list() {
        match store.load(&name) {
            Ok(profile) => profiles.push(ProfileSummary {
                name,
                display_name: profile.display_name,
                description: profile.description,
                variants: profile.variants.keys().cloned().collect(),
                load_error: None,
            }),
            Err(e) => profiles.push(ProfileSummary {
                name: name.clone(),
                display_name: name,
                description: String::new(),
                variants: Vec::new(),
                load_error: Some(e.to_string()),
            }),
        }
    }
    Ok(ListResult {
        location: store.location(),
        profiles,
    })
}

impl Output for ListResult {
    fn human(&self) -> String {
        if self.profiles.is_empty() {
            return "No profiles found. Run `claude-profiles init` first.".to_string();
        }

        let mut out = format!("Available profiles (from {}):\n", self.location);
        for profile in &self.profiles {
            if let Some(err) = &profile.load_error {
                writeln!(out, "  {:<20} (failed to load: {err})", profile.name).ok();
                continue;
            }
            writeln!(
                out,
                "  {:<20} {} — {}",
                profile.name, profile.display_name, profile.description
            )
            .ok();
            if !profile.variants.is_empty() {
                writeln!(out, "  {:<20} variants: {}", "", profile.variants.join(", ")).ok();
            }
        }
        out.trim_end().to_string()
    }
}

// ------------------------------------------------------------------ show

/// One MCP server in a `show` result.
#[derive(Debug, Serialize)]
pub struct McpServerSummary {
    pub name: String,
    /// The server's declared transport, defaulting to "stdio"
    #[serde(rename = "type")]
    pub server_type: String,
}

/// One variant in a `show` result.
#[derive(Debug, Serialize)]
pub struct VariantSummary {
    pub name: String,
    pub adds_mcps: Vec<String>,
    pub excludes_mcps: Vec<String>,
}

/// Result of `claude-profiles show`.
#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub mcp_servers: Vec<McpServerSummary>,
    pub variants: Vec<VariantSummary>,
    pub rules: Vec<String>,
    pub skills: Vec<String>,
}

/// Show the detail of one profile.
pub fn show(name: &str) -> Result<ShowResult> {
    let store = ProfileStore::open();
    let profile = store.load(name)?;

    let mcp_servers = profile
        .mcp_servers
        .iter()
        .map(|(name, config)| McpServerSummary {
            name: name.clone(),
            server_type: config
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("stdio")
                .to_string(),
        })
        .collect();

    let variants = profile
        .variants
        .iter()
        .map(|(name, v)| VariantSummary {
            name: name.clone(),
            adds_mcps: v.mcp_servers.keys().cloned().collect(),
            excludes_mcps: v.exclude_mcps.clone(),
        })
        .collect();

    Ok(ShowResult {
        name: name.to_string(),
        display_name: profile.display_name,
        description: profile.description,
        mcp_servers,
        variants,
        rules: profile.rules.keys().cloned().collect(),
        skills: profile.skills.keys().cloned().collect(),
    })
}

impl Output for ShowResult {
    fn human(&self) -> String {
        let mut out = format!("{} — {}\n  {}\n", self.name, self.display_name, self.description);

        if !self.mcp_servers.is_empty() {
            out.push_str("\nMCP servers:\n");
            for server in &self.mcp_servers {
                writeln!(out, "  {} ({})", server.name, server.server_type).ok();
            }
        }

        if !self.variants.is_empty() {
            out.push_str("\nVariants:\n");
            for variant in &self.variants {
                let mut info = Vec::new();
                if !variant.adds_mcps.is_empty() {
                    info.push(format!("+MCP: {}", variant.adds_mcps.join(", ")));
                }
                if !variant.excludes_mcps.is_empty() {
                    info.push(format!("-MCP: {}", variant.excludes_mcps.join(", ")));
                }
                if info.is_empty() {
                    writeln!(out, "  {}", variant.name).ok();
                } else {
                    writeln!(out, "  {:<12} {}", variant.name, info.join(" | ")).ok();
                }
            }
        }

        if !self.rules.is_empty() {
            out.push_str("\nRules:\n");
            for rule in &self.rules {
                writeln!(out, "  {rule}.md").ok();
            }
        }

        if !self.skills.is_empty() {
            out.push_str("\nSkills:\n");
            for skill in &self.skills {
                writeln!(out, "  /{skill}").ok();
            }
        }

        out.trim_end().to_string()
    }
}

// ----------------------------------------------------------------- apply

/// Result of `claude-profiles apply`.
#[derive(Debug, Serialize)]
pub struct ApplyResult {
    pub profile: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub directory: String,
    pub auto_detected: bool,
    pub dry_run: bool,
    pub actions: Vec<Action>,
}

/// Apply a profile (or `auto`) to a project directory.
///
/// An explicit `--variant` wins over both the detection rule's variant and
/// the variant resolver. Requesting a variant the profile doesn't define is
/// not an error; the merge falls back to the base profile.
pub fn apply(
    name: &str,
    variant: Option<String>,
    directory: &Path,
    dry_run: bool,
) -> Result<ApplyResult> {
    let (profile_name, variant, auto_detected) = select_profile(name, variant, directory)?;
    let variant = variant.or_else(|| resolve_variant(&profile_name, directory));

    let store = ProfileStore::open();
    let profile = store.load(&profile_name)?;
    let config = merge(&profile, variant.as_deref());

    let actions = apply::plan(&config, directory)?;
    if !dry_run {
        apply::execute(&config, directory, &actions)?;
    }

    Ok(ApplyResult {
        profile: profile_name,
        display_name: profile.display_name,
        variant,
        directory: directory.display().to_string(),
        auto_detected,
        dry_run,
        actions,
    })
}

/// Resolve `auto` to the first detected stack; pass explicit names through.
fn select_profile(
    name: &str,
    variant: Option<String>,
    directory: &Path,
) -> Result<(String, Option<String>, bool)> {
    if name != "auto" {
        return Ok((name.to_string(), variant, false));
    }
    let detected = crate::detect::detect(directory)?;
    let Some((stack, rule_variant)) = detected.into_iter().next() else {
        return Err(Error::DetectionFailed);
    };
    Ok((stack, variant.or(rule_variant), true))
}

impl Output for ApplyResult {
    fn human(&self) -> String {
        let mut title = self.display_name.clone();
        if let Some(v) = &self.variant {
            title.push_str(&format!(" ({v})"));
        }

        let mut out = String::new();
        if self.auto_detected {
            writeln!(out, "Auto-detected: {}", self.profile).ok();
        }
        writeln!(out, "Profile: {title}").ok();
        writeln!(out, "Target:  {}\n", self.directory).ok();
        if self.dry_run {
            out.push_str("[dry-run] no files will be modified\n\n");
        }

        for action in &self.actions {
            writeln!(out, "  {}", action.describe()).ok();
        }

        if self.dry_run {
            writeln!(out, "\nPlan only; re-run without --dry-run to write.").ok();
        } else {
            writeln!(out, "\nProfile '{title}' applied.").ok();
            writeln!(
                out,
                "Customize with .claude/CLAUDE.local.md and .claude/settings.local.json"
            )
            .ok();
        }
        out.trim_end().to_string()
    }
}

// ------------------------------------------------------------------ init

/// Result of `claude-profiles init`.
#[derive(Debug, Serialize)]
pub struct InitResult {
    pub directory: String,
    pub initialized: bool,
    pub profiles: Vec<String>,
}

/// Materialize the builtin profiles into the user profile directory.
pub fn init(force: bool) -> Result<InitResult> {
    let dir = store::user_profiles_dir()
        .ok_or_else(|| Error::Other("could not determine the home directory".to_string()))?;

    if dir.exists() && !force {
        return Ok(InitResult {
            directory: dir.display().to_string(),
            initialized: false,
            profiles: Vec::new(),
        });
    }

    let profiles = store::write_builtins(&dir)?;
    Ok(InitResult {
        directory: dir.display().to_string(),
        initialized: true,
        profiles,
    })
}

impl Output for InitResult {
    fn human(&self) -> String {
        if !self.initialized {
            return format!(
                "{} already exists. Use --force to overwrite the profiles in it.",
                self.directory
            );
        }

        let mut out = String::new();
        for name in &self.profiles {
            writeln!(out, "  + {name}.json").ok();
        }
        writeln!(out, "\nProfiles initialized in {}", self.directory).ok();
        out.push_str("Edit the JSON files to customize them.");
        out
    }
}

// ------------------------------------------------------------------ diff

/// Result of `claude-profiles diff`.
#[derive(Debug, Serialize)]
pub struct DiffResult {
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub directory: String,
    #[serde(flatten)]
    pub report: DiffReport,
}

/// Compare a directory's configuration against a profile (or `auto`).
pub fn diff(name: &str, directory: &Path) -> Result<DiffResult> {
    let (profile_name, variant, _) = select_profile(name, None, directory)?;
    let variant = variant.or_else(|| resolve_variant(&profile_name, directory));

    let store = ProfileStore::open();
    let profile = store.load(&profile_name)?;
    let config = merge(&profile, variant.as_deref());
    let report = crate::diff::diff(&config, directory);

    Ok(DiffResult {
        profile: profile_name,
        variant,
        directory: directory.display().to_string(),
        report,
    })
}

impl Output for DiffResult {
    fn human(&self) -> String {
        let mut out = format!("Comparing against profile '{}':\n", self.profile);

        match &self.report.mcp {
            McpState::Absent => {
                out.push_str("\n  .mcp.json absent\n");
            }
            McpState::Present { missing, extra } => {
                if missing.is_empty() && extra.is_empty() {
                    out.push_str("\n  MCP servers: OK\n");
                }
                if !missing.is_empty() {
                    out.push_str("\n  Missing MCP servers:\n");
                    for name in missing {
                        writeln!(out, "    - {name}").ok();
                    }
                }
                if !extra.is_empty() {
                    out.push_str("\n  Extra MCP servers (local additions):\n");
                    for name in extra {
                        writeln!(out, "    + {name}").ok();
                    }
                }
            }
        }

        if !self.report.missing_rules.is_empty() {
            out.push_str("\n  Missing rules:\n");
            for name in &self.report.missing_rules {
                writeln!(out, "    - {name}.md").ok();
            }
        }

        if !self.report.missing_skills.is_empty() {
            out.push_str("\n  Missing skills:\n");
            for name in &self.report.missing_skills {
                writeln!(out, "    - /{name}").ok();
            }
        }

        if self.report.is_clean() {
            out.push_str("\n  Configuration matches the profile.\n");
        }

        out.trim_end().to_string()
    }
}
