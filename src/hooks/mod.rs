//! Hook implementations for Claude Code.

mod require_history_cli;

pub use require_history_cli::{
    not_found_message, run_require_history_cli_hook, GateResult, DOCS_PATH, MODULE_PATH,
};

/// Exit code that lets the tool call proceed.
pub const EXIT_ALLOW: i32 = 0;

/// Exit code that blocks the tool call.
///
/// Claude Code reserves this status for "block this operation"; other
/// non-zero codes are treated as unrelated errors.
pub const EXIT_BLOCK: i32 = 2;
