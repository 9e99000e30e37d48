//! Tests for the CLI module.

use super::*;
use crate::paths;
use crate::resolver::TOOL_NAME;
use crate::search_path::RealExecutableSearch;
use crate::traits::ExecutableSearch;
use std::path::Path;
use std::process::ExitCode;
use tempfile::TempDir;

fn write_config(dir: &Path, content: &str) {
    let path = paths::fallback_config_path(dir);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Write a config pointing at a file that exists, and return that file.
fn write_valid_fallback(dir: &Path) -> std::path::PathBuf {
    let fake = dir.join("claude-history-build");
    std::fs::write(&fake, "").unwrap();
    write_config(dir, &format!("cli:\n  path: {}\n", fake.display()));
    fake
}

#[test]
fn test_parse_no_args_defaults_to_check() {
    let cli = parse_args(["claude-history-gate"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.command.unwrap_or_default(), Command::Check);
    assert_eq!(cli.dir, std::path::PathBuf::from("."));
}

#[test]
fn test_parse_subcommands() {
    assert_eq!(parse_args(["prog", "check"]).unwrap().command, Some(Command::Check));
    assert_eq!(parse_args(["prog", "resolve"]).unwrap().command, Some(Command::Resolve));
    assert_eq!(parse_args(["prog", "version"]).unwrap().command, Some(Command::Version));
}

#[test]
fn test_parse_dir_flag() {
    let cli = parse_args(["prog", "--dir", "/some/project"]).unwrap();
    assert_eq!(cli.dir, std::path::PathBuf::from("/some/project"));

    let cli = parse_args(["prog", "resolve", "--dir", "/other"]).unwrap();
    assert_eq!(cli.command, Some(Command::Resolve));
    assert_eq!(cli.dir, std::path::PathBuf::from("/other"));
}

#[test]
fn test_parse_unknown_command_exits_one() {
    let output = parse_args(["prog", "install"]).unwrap_err();
    assert_eq!(output.exit_code, ExitCode::from(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_parse_unknown_flag_exits_one() {
    let output = parse_args(["prog", "--bogus"]).unwrap_err();
    assert_eq!(output.exit_code, ExitCode::from(1));
}

#[test]
fn test_parse_help_exits_zero() {
    let output = parse_args(["prog", "--help"]).unwrap_err();
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout[0].contains("resolve"));
}

#[test]
fn test_parse_version_flag_exits_zero() {
    let output = parse_args(["prog", "--version"]).unwrap_err();
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout[0].contains(crate::VERSION));
}

#[test]
fn test_run_version() {
    let dir = TempDir::new().unwrap();
    let output = run(Command::Version, dir.path());
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stderr[0].contains(crate::VERSION));
}

#[test]
fn test_run_check_with_fallback_config() {
    let dir = TempDir::new().unwrap();
    write_valid_fallback(dir.path());

    let output = run(Command::Check, dir.path());
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_run_check_does_not_write_by_default() {
    let dir = TempDir::new().unwrap();
    write_valid_fallback(dir.path());

    run(Command::Check, dir.path());
    assert!(!paths::hook_events_path(dir.path()).exists());
}

#[test]
fn test_run_check_logs_when_enabled() {
    let dir = TempDir::new().unwrap();
    let fake = dir.path().join("claude-history-build");
    std::fs::write(&fake, "").unwrap();
    write_config(dir.path(), &format!("debug_logging: true\ncli:\n  path: {}\n", fake.display()));

    run(Command::Check, dir.path());

    let log = std::fs::read_to_string(paths::hook_events_path(dir.path())).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("\"found\":true"));
}

#[test]
fn test_run_resolve_prints_found_path() {
    let dir = TempDir::new().unwrap();
    let fake = write_valid_fallback(dir.path());
    // A real install on the test machine's PATH takes priority
    let expected = RealExecutableSearch::new().find(TOOL_NAME).unwrap_or(fake);

    let output = run(Command::Resolve, dir.path());
    assert_eq!(output.exit_code, ExitCode::SUCCESS);
    assert_eq!(output.stdout, vec![expected.display().to_string()]);
}

#[test]
fn test_exit_code_from_i32() {
    assert_eq!(exit_code_from_i32(0), ExitCode::SUCCESS);
    assert_eq!(exit_code_from_i32(2), ExitCode::from(2));
    assert_eq!(exit_code_from_i32(-1), ExitCode::from(1));
    assert_eq!(exit_code_from_i32(1000), ExitCode::from(255));
}
