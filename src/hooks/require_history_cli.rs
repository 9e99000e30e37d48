//! Pre-tool-use gate requiring the claude-history CLI.
//!
//! Allows the tool call when the CLI resolves, and blocks it with
//! installation guidance otherwise.

use crate::error::Result;
use crate::hooks::{EXIT_ALLOW, EXIT_BLOCK};
use crate::paths;
use crate::resolver::{ResolutionReport, Resolver, TOOL_NAME};
use crate::templates;

/// Installation documentation, relative to the project root.
pub const DOCS_PATH: &str = ".claude/skills/history/README.md";

/// Go module path used for package-manager installs.
pub const MODULE_PATH: &str = "github.com/randlee/claude-history";

/// Result of running the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateResult {
    /// Exit code (0 = allow, 2 = block).
    pub exit_code: i32,
    /// Messages to display to stderr.
    pub messages: Vec<String>,
    /// Detailed resolution outcome, for the debug log.
    pub report: ResolutionReport,
    /// Whether the fallback config asked for the event log.
    pub debug_logging: bool,
}

impl GateResult {
    /// Whether the tool call is allowed to proceed.
    pub const fn allowed(&self) -> bool {
        self.exit_code == EXIT_ALLOW
    }
}

/// Render the installation guidance shown when the CLI is missing.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn not_found_message() -> Result<String> {
    templates::render_with_vars(
        templates::CLI_NOT_FOUND,
        &[
            ("tool_name", TOOL_NAME),
            ("docs_path", DOCS_PATH),
            ("module_path", MODULE_PATH),
            ("config_path", paths::CONFIG_FILE_PATH),
        ],
    )
    .map(|message| message.trim_end().to_string())
}

/// Run the gate.
///
/// Returns exit code 0 with no messages when the CLI resolves, or exit code
/// 2 with installation guidance when it doesn't.
///
/// # Errors
///
/// Returns an error if the guidance template fails to render.
pub fn run_require_history_cli_hook(resolver: &Resolver<'_>) -> Result<GateResult> {
    let evaluation = resolver.evaluate();
    let debug_logging = evaluation.debug_logging();
    let report = evaluation.report;

    let (exit_code, messages) = match report {
        ResolutionReport::Found { .. } => (EXIT_ALLOW, Vec::new()),
        ResolutionReport::NotFound(_) => (EXIT_BLOCK, vec![not_found_message()?]),
    };

    Ok(GateResult { exit_code, messages, report, debug_logging })
}
