//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output.

use crate::cli::{Cli, Command};
use crate::config::YamlConfigSource;
use crate::hook_logging;
use crate::hooks::{self, EXIT_BLOCK};
use crate::resolver::{Resolution, Resolver, TOOL_NAME};
use crate::search_path::RealExecutableSearch;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Convert i32 exit code to `ExitCode`, clamping to valid range.
#[must_use]
pub fn exit_code_from_i32(code: i32) -> ExitCode {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let code_u8 = if code < 0 {
        1u8 // Treat negative as error
    } else if code > 255 {
        255u8 // Clamp to max
    } else {
        code as u8
    };
    ExitCode::from(code_u8)
}

/// Parse command-line arguments.
///
/// Usage errors exit with 1 rather than clap's default 2, which the plugin
/// system would read as "block". `--help` and `--version` exit with 0.
///
/// # Errors
///
/// Returns the output to print when parsing does not yield a command.
pub fn parse_args<I, T>(args: I) -> Result<Cli, CliOutput>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let text = e.to_string().trim_end().to_string();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![text], stderr: vec![] }
            }
            _ => CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![text] },
        }
    })
}

/// Run a CLI command against the project in `base_dir`.
pub fn run(command: Command, base_dir: &Path) -> CliOutput {
    match command {
        Command::Check => run_check(base_dir),
        Command::Resolve => run_resolve(base_dir),
        Command::Version => run_version(),
    }
}

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("claude-history-gate v{}", crate::VERSION)],
    }
}

fn run_check(base_dir: &Path) -> CliOutput {
    let search = RealExecutableSearch::new();
    let config = YamlConfigSource::new();
    let resolver = Resolver::new(&search, &config, base_dir);

    match hooks::run_require_history_cli_hook(&resolver) {
        Ok(result) => {
            hook_logging::log_gate_decision(result.debug_logging, base_dir, &result.report);
            CliOutput {
                exit_code: exit_code_from_i32(result.exit_code),
                stdout: vec![],
                stderr: result.messages,
            }
        }
        Err(e) => CliOutput {
            exit_code: ExitCode::from(1),
            stdout: vec![],
            stderr: vec![format!("Error running claude-history gate: {e}")],
        },
    }
}

fn run_resolve(base_dir: &Path) -> CliOutput {
    let search = RealExecutableSearch::new();
    let config = YamlConfigSource::new();
    let resolver = Resolver::new(&search, &config, base_dir);

    match resolver.resolve() {
        Resolution::Found(path) => CliOutput {
            exit_code: ExitCode::SUCCESS,
            stdout: vec![path.display().to_string()],
            stderr: vec![],
        },
        Resolution::NotFound => CliOutput {
            exit_code: exit_code_from_i32(EXIT_BLOCK),
            stdout: vec![],
            stderr: vec![format!("ERROR: {TOOL_NAME} CLI tool not found")],
        },
    }
}
