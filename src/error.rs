//! Error types for gatecheck.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gatecheck operations.
///
/// Command failures are never errors; they are carried as data in
/// [`ExecutionResult`](crate::ExecutionResult). This enum covers the outer
/// layer only: writing the report, generating the settings file, and reading
/// wizard input.
#[derive(Error, Debug)]
pub enum GatecheckError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file already exists and will not be overwritten.
    #[error("settings.local.json already exists at {0}")]
    SettingsExists(PathBuf),

    /// Neither the command line nor the wizard produced any commands.
    #[error("no commands provided")]
    NoCommands,
}

/// Convenience Result type for gatecheck operations.
pub type Result<T> = std::result::Result<T, GatecheckError>;
