//! Base + variant merge.

use super::{EffectiveConfig, Profile};
use serde_json::Value;

/// Merge a profile with an optional variant override into one effective
/// configuration.
///
/// Step order matters: variant additions are merged first and `exclude_mcps`
/// is applied last, so an excluded server never survives even when the same
/// variant adds it. A variant name absent from `profile.variants` is ignored
/// and the base profile is returned unchanged (lenient fallback). The stored
/// profile is never mutated.
pub fn merge(profile: &Profile, variant: Option<&str>) -> EffectiveConfig {
    let mut effective = EffectiveConfig {
        mcp_servers: profile.mcp_servers.clone(),
        claude_md: profile.claude_md.clone(),
        rules: profile.rules.clone(),
        skills: profile.skills.clone(),
        settings: profile.settings.clone(),
    };

    let Some(overrides) = variant.and_then(|v| profile.variants.get(v)) else {
        return effective;
    };

    for (name, server) in &overrides.mcp_servers {
        effective.mcp_servers.insert(name.clone(), server.clone());
    }
    for (name, text) in &overrides.rules {
        effective.rules.insert(name.clone(), text.clone());
    }
    for (name, text) in &overrides.skills {
        effective.skills.insert(name.clone(), text.clone());
    }

    if !overrides.claude_md_append.is_empty() {
        effective.claude_md = format!("{}\n\n{}", effective.claude_md, overrides.claude_md_append);
    }

    merge_settings(&mut effective.settings, &overrides.settings_merge);

    // Exclusions beat additions, so this stays the final step.
    for name in &overrides.exclude_mcps {
        effective.mcp_servers.remove(name);
    }

    effective
}

/// One-level-deep settings merge.
///
/// For each top-level key: when both sides hold JSON objects their entries
/// are merged with the override winning; any other combination replaces the
/// base value wholesale. Nested objects below the first level are not
/// merged.
fn merge_settings(
    base: &mut serde_json::Map<String, Value>,
    overrides: &serde_json::Map<String, Value>,
) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(additions)) => {
                for (k, v) in additions {
                    existing.insert(k.clone(), v.clone());
                }
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
