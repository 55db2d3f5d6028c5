//! Command execution engine.
//!
//! This module provides the heart of gatecheck:
//! - One-shot command execution with output capture
//! - Best-effort output filtering through external commands
//! - Sequential and concurrent execution strategies
//! - Abort-sentinel handling (exit code 2 stops remaining work)
//!
//! # Example
//!
//! ```no_run
//! use gatecheck::execution::{CommandSpec, Executor};
//! use gatecheck::ExecutionConfig;
//!
//! # async fn run() {
//! let executor = Executor::new(ExecutionConfig::default());
//! let specs = vec![CommandSpec::new("npm run lint"), CommandSpec::new("npm test")];
//!
//! // Failures only, in completion order
//! let failures = executor.run_concurrent(&specs).await;
//! # }
//! ```

mod command;
mod executor;
mod filter;
mod result;

pub use command::CommandSpec;
pub use executor::Executor;
pub use filter::apply_filter;
pub use result::{ExecutionResult, ABORT_EXIT_CODE, RUNNER_FAILURE_EXIT_CODE};
