//! Debug logging of gate decisions.
//!
//! When `debug_logging: true` is set in `.sc/history/config.yml`, every gate
//! decision is appended as a JSONL line to `.sc/history/hook-events.jsonl`.
//! Unlike the exit code, each entry records which layer resolved the CLI or
//! why the fallback missed.

use crate::paths;
use crate::resolver::ResolutionReport;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Hook type recorded for gate decisions.
pub const GATE_HOOK_TYPE: &str = "pre-tool-use";

/// Log a gate decision if debug logging is enabled.
///
/// `debug_logging` comes from the config the gate already loaded. Errors
/// are silently ignored. Logging never changes the gate's outcome.
pub fn log_gate_decision(debug_logging: bool, base_dir: &Path, report: &ResolutionReport) {
    if !debug_logging {
        return;
    }

    write_event(&event_entry(GATE_HOOK_TYPE, report), base_dir);
}

/// Build the JSON entry for a gate decision.
fn event_entry(hook_type: &str, report: &ResolutionReport) -> serde_json::Value {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match report {
        ResolutionReport::Found { path, source } => serde_json::json!({
            "timestamp": timestamp,
            "hook_type": hook_type,
            "found": true,
            "path": path.display().to_string(),
            "source": source.to_string(),
        }),
        ResolutionReport::NotFound(miss) => serde_json::json!({
            "timestamp": timestamp,
            "hook_type": hook_type,
            "found": false,
            "path": null,
            "miss": miss.to_string(),
        }),
    }
}

/// Append the entry to the log file.
fn write_event(entry: &serde_json::Value, base_dir: &Path) {
    let log_path = paths::hook_events_path(base_dir);

    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    // Write the entry as a single line
    let _ = writeln!(file, "{entry}");
}
