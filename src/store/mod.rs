//! Profile storage.
//!
//! Profiles are JSON documents, one per stack name. Storage location
//! resolution, first existing wins (the locations are never merged):
//!
//! 1. `CLAUDE_PROFILES_DIR` environment variable, when it names an
//!    existing directory
//! 2. `~/.claude-profiles`, when it exists (created by `init`)
//! 3. the builtin profile set compiled into the binary
//!
//! Profiles are read fresh on every invocation; nothing is cached across
//! runs.

pub mod builtin;

use crate::profile::Profile;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the user profile directory.
pub const PROFILES_DIR_ENV: &str = "CLAUDE_PROFILES_DIR";

/// Where profile documents are read from.
enum Source {
    /// A directory of `<name>.json` documents
    Dir(PathBuf),
    /// The builtin set compiled into the binary
    Builtin,
}

/// Read access to the resolved profile location.
pub struct ProfileStore {
    source: Source,
}

/// The user-level profile directory: the env override when set, else
/// `~/.claude-profiles`. Returned whether or not it exists — `open` only
/// selects it when present, but `init` needs the path to create it.
pub fn user_profiles_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(PROFILES_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".claude-profiles"))
}

impl ProfileStore {
    /// Open the store, resolving the storage location.
    pub fn open() -> Self {
        match user_profiles_dir() {
            Some(dir) if dir.is_dir() => Self {
                source: Source::Dir(dir),
            },
            _ => Self {
                source: Source::Builtin,
            },
        }
    }

    #[cfg(test)]
    fn with_dir(dir: PathBuf) -> Self {
        Self {
            source: Source::Dir(dir),
        }
    }

    /// Load a profile by exact name.
    pub fn load(&self, name: &str) -> Result<Profile> {
        match &self.source {
            Source::Dir(dir) => {
                let path = dir.join(format!("{name}.json"));
                if !path.exists() {
                    return Err(Error::ProfileNotFound(name.to_string()));
                }
                let content = fs::read_to_string(&path)?;
                Ok(serde_json::from_str(&content)?)
            }
            Source::Builtin => match builtin::get(name) {
                Some(document) => Ok(serde_json::from_str(document)?),
                None => Err(Error::ProfileNotFound(name.to_string())),
            },
        }
    }

    /// All available profile names, sorted.
    ///
    /// Directory listings skip non-JSON files and names starting with `_`.
    pub fn list(&self) -> Vec<String> {
        match &self.source {
            Source::Dir(dir) => {
                let mut names: Vec<String> = fs::read_dir(dir)
                    .map(|entries| {
                        entries
                            .flatten()
                            .filter_map(|entry| {
                                let path = entry.path();
                                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                                    return None;
                                }
                                let stem = path.file_stem()?.to_str()?;
                                if stem.starts_with('_') {
                                    return None;
                                }
                                Some(stem.to_string())
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                names.sort();
                names
            }
            Source::Builtin => builtin::names(),
        }
    }

    /// Describe where profiles are read from, for display.
    pub fn location(&self) -> String {
        match &self.source {
            Source::Dir(dir) => dir.display().to_string(),
            Source::Builtin => "(builtin)".to_string(),
        }
    }
}

/// Materialize every builtin profile into `dir` as `<name>.json`.
///
/// Returns the written profile names. Existing files are overwritten;
/// callers decide whether that is allowed (see `init --force`).
pub fn write_builtins(dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, document) in builtin::ALL {
        fs::write(dir.join(format!("{name}.json")), document)?;
        written.push((*name).to_string());
    }
    Ok(written)
}
