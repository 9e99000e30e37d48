//! CLI binary for the claude-history gate.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the library.

use std::env;
use std::process::ExitCode;

use claude_history_gate::cli::{parse_args, run};

fn main() -> ExitCode {
    let output = match parse_args(env::args_os()) {
        Ok(cli) => run(cli.command.unwrap_or_default(), &cli.dir),
        Err(output) => output,
    };

    for line in output.stdout {
        println!("{line}");
    }
    for msg in output.stderr {
        eprintln!("{msg}");
    }

    output.exit_code
}
