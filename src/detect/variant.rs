//! Stack variant resolution.
//!
//! Variants come from deeper signals than marker files: build-tool files,
//! manifest dependency sets, framework entry files. Each stack gets a small
//! ordered list of (signal, variant) checks evaluated first-match-wins,
//! mirroring the shape of the detection rule table.

use super::marker_matches;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Framework precedence for the JS/TS family: meta-framework before base
/// framework before generic API server. Any listed dependency name claims
/// the variant.
const JS_FRAMEWORKS: &[(&[&str], &str)] = &[
    (&["next"], "nextjs"),
    (&["react"], "react"),
    (&["vue"], "vue"),
    (&["svelte", "@sveltejs/kit"], "svelte"),
    (&["express", "fastify", "koa"], "api"),
];

/// Resolve the specific variant of a stack (e.g. maven vs gradle for java).
///
/// Returns `None` when no sub-signal matches or the stack has no variant
/// logic. A malformed manifest is treated as no signal, never an error.
pub fn resolve_variant(stack: &str, directory: &Path) -> Option<String> {
    match stack {
        "java" => resolve_java(directory),
        "typescript-react" | "typescript-node" | "javascript-node" => resolve_js(directory),
        "python" => resolve_python(directory),
        _ => None,
    }
}

fn resolve_java(directory: &Path) -> Option<String> {
    if marker_matches(directory, "pom.xml") {
        return Some("maven".to_string());
    }
    let gradle_markers = ["build.gradle", "build.gradle.kts", "gradlew"];
    if gradle_markers.iter().any(|m| marker_matches(directory, m)) {
        return Some("gradle".to_string());
    }
    None
}

/// Pick a JS/TS framework from the combined dependency set of package.json.
fn resolve_js(directory: &Path) -> Option<String> {
    let manifest = fs::read_to_string(directory.join("package.json")).ok()?;
    let pkg: Value = serde_json::from_str(&manifest).ok()?;

    let mut deps: BTreeSet<&str> = BTreeSet::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(map) = pkg.get(section).and_then(Value::as_object) {
            deps.extend(map.keys().map(String::as_str));
        }
    }

    for (names, variant) in JS_FRAMEWORKS {
        if names.iter().any(|name| deps.contains(name)) {
            return Some((*variant).to_string());
        }
    }
    None
}

fn resolve_python(directory: &Path) -> Option<String> {
    if marker_matches(directory, "manage.py") {
        return Some("django".to_string());
    }
    if marker_matches(directory, "app.py") || marker_matches(directory, "wsgi.py") {
        return Some("flask".to_string());
    }
    // Substring scan, not a TOML parse: matches a fastapi dependency spec in
    // any form, at the cost of the occasional false positive in comments.
    let pyproject = directory.join("pyproject.toml");
    if let Ok(content) = fs::read_to_string(&pyproject) {
        if content.to_lowercase().contains("fastapi") {
            return Some("fastapi".to_string());
        }
    }
    None
}
