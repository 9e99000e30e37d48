//! Command-line interface for the claude-history gate.
//!
//! Run with no subcommand, the binary is the pre-tool-use hook itself.

mod run;

#[cfg(test)]
mod tests;

pub use run::{exit_code_from_i32, parse_args, run, CliOutput};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gate that blocks history-search tools until the claude-history CLI is installed.
///
/// With no command, checks for the CLI and exits 0 (found) or 2 (missing).
#[derive(Parser, Debug)]
#[command(name = "claude-history-gate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project directory containing `.sc/history/config.yml`
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// The command to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Run the gate: exit 0 if the CLI is available, 2 with install guidance if not.
    ///
    /// This is what the plugin system invokes before the history-search tool.
    #[default]
    Check,

    /// Print the path of the CLI the gate would accept.
    Resolve,

    /// Show version information.
    Version,
}
