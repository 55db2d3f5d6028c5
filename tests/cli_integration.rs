//! CLI integration tests.
//!
//! These tests verify argument parsing and the args-to-config mapping.

use std::ffi::OsString;

use gatecheck::cli::parse_args_from;
use gatecheck::config::ExecutionConfig;
use gatecheck::init::InitOptions;

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("gatecheck")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.commands.is_empty());
    assert!(!result.parallel);
    assert!(!result.stdout);
    assert!(!result.no_stderr);
    assert!(!result.init);
    assert!(result.message.is_none());
    assert!(result.stdout_filter.is_none());
    assert!(result.stderr_filter.is_none());
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-p",
        "-m",
        "checks failed",
        "--stdout",
        "--stdout-filter",
        "grep -v noise",
        "--stderr-filter",
        "head -n 5",
        "--no-stderr",
        "-l",
        "debug",
        "npm test",
        "npm run lint",
    ]))
    .unwrap();

    assert!(result.parallel);
    assert_eq!(result.message, Some("checks failed".to_string()));
    assert!(result.stdout);
    assert_eq!(result.stdout_filter, Some("grep -v noise".to_string()));
    assert_eq!(result.stderr_filter, Some("head -n 5".to_string()));
    assert!(result.no_stderr);
    assert_eq!(result.log_level, Some("debug".to_string()));
    assert_eq!(result.commands, vec!["npm test", "npm run lint"]);
}

#[test]
fn test_cli_commands_keep_input_order() {
    let result = parse_args_from(args(&["c", "a", "b"])).unwrap();
    assert_eq!(result.commands, vec!["c", "a", "b"]);
}

#[test]
fn test_cli_flags_interleaved_with_commands() {
    let result = parse_args_from(args(&["echo one", "-p", "echo two"])).unwrap();
    assert!(result.parallel);
    assert_eq!(result.commands, vec!["echo one", "echo two"]);
}

#[test]
fn test_cli_unknown_flag_is_error() {
    assert!(parse_args_from(args(&["--frobnicate"])).is_err());
}

#[test]
fn test_cli_missing_filter_value_is_error() {
    assert!(parse_args_from(args(&["--stdout-filter"])).is_err());
}

// ============================================================================
// Args-to-Config Mapping Tests
// ============================================================================

#[test]
fn test_execution_config_from_args() {
    let parsed = parse_args_from(args(&[
        "--stdout",
        "--stdout-filter",
        "grep error",
        "--no-stderr",
        "make",
    ]))
    .unwrap();

    let config = ExecutionConfig::from_args(&parsed);
    assert!(config.include_stdout);
    assert_eq!(config.stdout_filter, Some("grep error".to_string()));
    assert!(config.stderr_filter.is_none());
    assert!(config.suppress_stderr);
}

#[test]
fn test_init_options_from_args() {
    let parsed = parse_args_from(args(&[
        "--init",
        "-m",
        "blocked",
        "--stdout",
        "cargo test",
    ]))
    .unwrap();

    assert!(parsed.init);
    let opts = InitOptions::from_args(&parsed);
    assert_eq!(opts.commands, vec!["cargo test"]);
    assert_eq!(opts.message, Some("blocked".to_string()));
    assert!(opts.include_stdout);
    assert!(!opts.suppress_stderr);
}
