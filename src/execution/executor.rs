//! Sequential and concurrent command execution.

use std::process::Stdio;

use tokio::process::Command;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::command::CommandSpec;
use super::filter::apply_filter;
use super::result::{ExecutionResult, RUNNER_FAILURE_EXIT_CODE};
use crate::config::ExecutionConfig;

/// Runs commands and aggregates the failed results.
///
/// Both strategies return only failures: a result is kept when its exit code
/// is non-zero, and the abort sentinel (exit code 2) cuts the run short.
#[derive(Debug, Clone)]
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Create an executor with the given per-run configuration.
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Run commands one at a time in input order, returning failures only.
    ///
    /// A result carrying the abort sentinel ends the run immediately; the
    /// remaining commands are never started. The returned order is execution
    /// order, so identical inputs and child behavior yield identical output.
    pub async fn run_sequential(&self, specs: &[CommandSpec]) -> Vec<ExecutionResult> {
        let mut failures = Vec::new();

        for spec in specs {
            let result = self.run_command(spec).await;
            if result.success() {
                continue;
            }
            let abort = result.is_abort();
            failures.push(result);
            if abort {
                debug!(command = spec.line(), "abort sentinel, skipping remaining commands");
                break;
            }
        }

        failures
    }

    /// Run all commands at once, returning failures in completion order.
    ///
    /// One task per command, no concurrency cap. Each task checks the shared
    /// cancellation token before starting; a task that finds it already
    /// cancelled exits without producing any result. A task whose command
    /// exits with the abort sentinel cancels the token before publishing its
    /// result. Cancellation never kills a command that is already running,
    /// and two tasks racing past the check is harmless: `cancel()` is
    /// idempotent and an extra command run has no semantic effect.
    ///
    /// Completion order is inherently nondeterministic across runs.
    pub async fn run_concurrent(&self, specs: &[CommandSpec]) -> Vec<ExecutionResult> {
        let token = CancellationToken::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        for spec in specs {
            let executor = self.clone();
            let spec = spec.clone();
            let token = token.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                if token.is_cancelled() {
                    debug!(command = spec.line(), "skipped, run already aborted");
                    return;
                }

                let result = executor.run_command(&spec).await;
                if result.is_abort() {
                    token.cancel();
                }
                let _ = tx.send(result);
            });
        }
        // The loop below ends once every task has sent or been skipped.
        drop(tx);

        let mut failures = Vec::new();
        while let Some(result) = rx.recv().await {
            if !result.success() {
                failures.push(result);
            }
        }

        failures
    }

    /// Execute a single command and map its outcome to a result.
    ///
    /// Never fails: every failure mode is encoded in the returned
    /// [`ExecutionResult`]. An empty command and a spawn failure both report
    /// exit code 1; a signal death with nothing captured gets the runner's
    /// own description so the failure stays visible.
    pub async fn run_command(&self, spec: &CommandSpec) -> ExecutionResult {
        let Some((program, args)) = spec.tokenize() else {
            let stderr = if self.config.suppress_stderr {
                String::new()
            } else {
                "empty command".to_string()
            };
            return ExecutionResult::runner_failure(spec.line(), stderr);
        };

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let (exit_code, stdout, stderr) = match output {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(RUNNER_FAILURE_EXIT_CODE);
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.code().is_none() && stderr.is_empty() {
                    stderr = format!("command terminated abnormally: {}", output.status);
                }
                (exit_code, stdout, stderr)
            }
            Err(err) => {
                warn!(command = spec.line(), error = %err, "failed to spawn command");
                (RUNNER_FAILURE_EXIT_CODE, String::new(), err.to_string())
            }
        };

        // Filters run before suppression; suppression always wins.
        let stdout = if self.config.include_stdout {
            apply_filter(stdout, self.config.stdout_filter.as_deref()).await
        } else {
            String::new()
        };
        let stderr = if self.config.suppress_stderr {
            String::new()
        } else {
            apply_filter(stderr, self.config.stderr_filter.as_deref()).await
        };

        ExecutionResult {
            command: spec.line().to_string(),
            exit_code,
            stderr,
            stdout,
        }
    }
}
