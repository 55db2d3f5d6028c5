//! Per-run execution configuration.

use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Settings that shape every command execution within one run.
///
/// Built once from the command line and never mutated afterwards; both
/// strategies share one copy for the whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Include captured stdout in results.
    pub include_stdout: bool,
    /// Filter command applied to captured stdout.
    pub stdout_filter: Option<String>,
    /// Filter command applied to captured stderr.
    pub stderr_filter: Option<String>,
    /// Force stderr to empty in every result.
    pub suppress_stderr: bool,
}

impl ExecutionConfig {
    /// Build the configuration from parsed command-line arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            include_stdout: args.stdout,
            stdout_filter: args.stdout_filter.clone(),
            stderr_filter: args.stderr_filter.clone(),
            suppress_stderr: args.no_stderr,
        }
    }
}
