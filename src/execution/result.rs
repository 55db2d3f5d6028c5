//! Execution result types.

use serde::{Deserialize, Serialize};

/// Exit code that aborts all remaining work.
///
/// A command legitimately exiting with status 2 is indistinguishable from a
/// deliberate abort; callers that need a plain failure should use a different
/// exit code.
pub const ABORT_EXIT_CODE: i32 = 2;

/// Exit code reported when the runner itself failed: an empty command, a
/// spawn failure, or an exit the platform cannot map to a status code.
pub const RUNNER_FAILURE_EXIT_CODE: i32 = 1;

/// Outcome of a single command execution.
///
/// Immutable once produced. Serializes in the envelope's wire shape:
/// `{command, exitCode, stderr, stdout?}`, with `stdout` omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// The original command text, for traceability.
    pub command: String,
    /// 0 = success; 1 = runner-level failure; 2 = abort sentinel; anything
    /// else is the child's real exit status.
    pub exit_code: i32,
    /// Captured (and possibly filtered) stderr, empty when suppressed.
    pub stderr: String,
    /// Captured stdout, empty unless the run was configured to include it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stdout: String,
}

impl ExecutionResult {
    /// Result for a command the runner could not execute at all.
    pub fn runner_failure(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            exit_code: RUNNER_FAILURE_EXIT_CODE,
            stderr: stderr.into(),
            stdout: String::new(),
        }
    }

    /// Whether the command succeeded.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether this result carries the abort sentinel.
    pub fn is_abort(&self) -> bool {
        self.exit_code == ABORT_EXIT_CODE
    }
}
