//! # gatecheck
//!
//! Run a list of check commands and report failures as structured JSON.
//!
//! `gatecheck` executes shell commands sequentially or in parallel, collects
//! the ones that failed, and prints a single JSON envelope on stderr for
//! downstream tooling (editor hooks) to parse. A command exiting with code 2
//! is an abort sentinel: remaining sequential commands are never started, and
//! concurrent commands that have not begun yet are skipped.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gatecheck::{CommandSpec, ExecutionConfig, Executor};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     gatecheck::logging::try_init(None).ok();
//!
//!     let executor = Executor::new(ExecutionConfig::default());
//!     let specs = vec![
//!         CommandSpec::new("cargo fmt --check"),
//!         CommandSpec::new("cargo clippy"),
//!     ];
//!
//!     let failures = executor.run_sequential(&specs).await;
//!     for result in &failures {
//!         eprintln!("{} exited with {}", result.command, result.exit_code);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod init;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use config::ExecutionConfig;
pub use error::{GatecheckError, Result};
pub use execution::{CommandSpec, ExecutionResult, Executor, ABORT_EXIT_CODE};
pub use report::ErrorReport;
