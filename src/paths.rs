//! Path utilities for the gate's fixed file locations.
//!
//! All gate files live under `.sc/history/` relative to the project
//! directory the hook runs in. Paths named in the fallback configuration may
//! be absolute, relative to that directory, or start with `~`.

use std::path::{Path, PathBuf};

/// Directory holding the gate's files, relative to the project directory.
pub const HISTORY_DIR: &str = ".sc/history";

/// Fallback configuration file path, relative to the project directory.
pub const CONFIG_FILE_PATH: &str = ".sc/history/config.yml";

/// Hook event log filename within [`HISTORY_DIR`].
pub const HOOK_EVENTS_FILENAME: &str = "hook-events.jsonl";

/// Get the fallback configuration path for a project directory.
#[must_use]
pub fn fallback_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_PATH)
}

/// Get the hook event log path for a project directory.
#[must_use]
pub fn hook_events_path(base_dir: &Path) -> PathBuf {
    base_dir.join(HISTORY_DIR).join(HOOK_EVENTS_FILENAME)
}

/// Turn a `cli.path` value from the fallback configuration into a path.
///
/// - `~` and `~/...` expand to the home directory (left untouched when the
///   home directory cannot be determined).
/// - Relative paths are joined onto `base_dir`.
/// - Absolute paths are returned as-is.
#[must_use]
pub fn resolve_configured_path(base_dir: &Path, raw: &str) -> PathBuf {
    let expanded = expand_home(raw);
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
