//! Append-only history of CLI invocations.
//!
//! One JSON line per invocation in `<profiles-dir>/history.jsonl`. Callers
//! discard the result (`let _ =`), so a logging failure can never affect a
//! command's exit status. When the store is serving the builtin profiles
//! (no profile directory on disk yet), there is nowhere to log and the
//! entry is skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// History log filename inside the profile directory.
pub const HISTORY_FILE: &str = "history.jsonl";

/// One logged CLI invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub command: String,
    pub args: serde_json::Value,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

/// Append one entry to the history log.
pub fn log_action(
    command: &str,
    args: serde_json::Value,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
) -> std::io::Result<()> {
    let Some(dir) = crate::store::user_profiles_dir() else {
        return Ok(());
    };
    if !dir.is_dir() {
        return Ok(());
    }

    let entry = HistoryEntry {
        timestamp: Utc::now(),
        command: command.to_string(),
        args,
        success,
        error,
        duration_ms,
    };
    let line = serde_json::to_string(&entry).map_err(std::io::Error::other)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(HISTORY_FILE))?;
    writeln!(file, "{line}")?;
    Ok(())
}
