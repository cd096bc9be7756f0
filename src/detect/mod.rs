//! Project stack detection.
//!
//! Detection is a fixed, ordered table of glob-marker rules evaluated
//! against a directory listing. The table is a policy constant: its order
//! encodes a curated specificity ranking (workspace and mobile markers
//! before generic build files), and downstream behavior depends on it —
//! `apply auto` takes the first detected stack.

pub mod variant;

use crate::{Error, Result};
use std::path::Path;

/// A single detection rule: any marker match claims the stack.
pub struct Rule {
    /// Glob patterns, evaluated in order relative to the project directory
    pub markers: &'static [&'static str],
    /// Stack label (also the profile name)
    pub stack: &'static str,
    /// Variant implied by the marker itself, if any
    pub variant: Option<&'static str>,
}

/// Ordered detection rules, most specific first.
pub static RULES: &[Rule] = &[
    // iOS / Swift
    Rule {
        markers: &["*.xcodeproj", "*.xcworkspace", "Package.swift"],
        stack: "ios-swift",
        variant: None,
    },
    // Flutter / Dart: pubspec.yaml is unique to Dart
    Rule {
        markers: &["pubspec.yaml"],
        stack: "flutter",
        variant: None,
    },
    // Android: needs an app/ module to distinguish from plain Gradle Java
    Rule {
        markers: &["app/build.gradle*", "app/build.gradle.kts"],
        stack: "android",
        variant: None,
    },
    // Java via Maven: pom.xml is unambiguous
    Rule {
        markers: &["pom.xml"],
        stack: "java",
        variant: Some("maven"),
    },
    // Java via Gradle: after Android, so only fires without an app/ module
    Rule {
        markers: &["build.gradle", "build.gradle.kts", "gradlew"],
        stack: "java",
        variant: Some("gradle"),
    },
    Rule {
        markers: &["Cargo.toml"],
        stack: "rust",
        variant: None,
    },
    Rule {
        markers: &["go.mod"],
        stack: "go",
        variant: None,
    },
    // TypeScript / React: tsx or a next config
    Rule {
        markers: &["next.config.*", "*.tsx"],
        stack: "typescript-react",
        variant: None,
    },
    // tsconfig without tsx is probably a backend
    Rule {
        markers: &["tsconfig.json"],
        stack: "typescript-node",
        variant: None,
    },
    Rule {
        markers: &["package.json"],
        stack: "javascript-node",
        variant: None,
    },
    Rule {
        markers: &["pyproject.toml", "setup.py", "requirements.txt", "Pipfile"],
        stack: "python",
        variant: None,
    },
    Rule {
        markers: &["CMakeLists.txt", "Makefile"],
        stack: "cpp",
        variant: None,
    },
];

/// A detected (stack, variant) pair.
pub type Detection = (String, Option<String>);

/// Detect the project stack(s) present in `directory`.
///
/// Returns pairs in rule-table order, deduplicated by (stack, variant).
/// Multiple rules can match in one pass (polyglot repositories); within a
/// rule, the first matching marker claims the stack and the rule's
/// remaining markers are skipped.
pub fn detect(directory: &Path) -> Result<Vec<Detection>> {
    if !directory.is_dir() {
        return Err(Error::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut detected: Vec<Detection> = Vec::new();
    for rule in RULES {
        for marker in rule.markers {
            if marker_matches(directory, marker) {
                let entry = (rule.stack.to_string(), rule.variant.map(str::to_string));
                if !detected.contains(&entry) {
                    detected.push(entry);
                }
                break;
            }
        }
    }
    Ok(detected)
}

/// True when the glob `pattern` matches at least one path under `directory`.
///
/// Unreadable entries during expansion count as no match for that entry,
/// never as an error.
pub(crate) fn marker_matches(directory: &Path, pattern: &str) -> bool {
    let full = directory.join(pattern);
    let Some(full) = full.to_str() else {
        return false;
    };
    match glob::glob(full) {
        Ok(paths) => paths.flatten().next().is_some(),
        Err(_) => false,
    }
}
