//! JSON error envelope written for downstream tooling.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::execution::ExecutionResult;

/// Envelope for failed command results.
///
/// Serialized as `{ "message": ..., "results": [...] }` and written to
/// stderr, where hook consumers pick it up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable summary shown by hook consumers.
    pub message: String,
    /// Failed results, in the order the strategy produced them.
    pub results: Vec<ExecutionResult>,
}

impl ErrorReport {
    /// Build a report, defaulting the message to `"N command(s) failed"`.
    pub fn new(message: Option<String>, results: Vec<ExecutionResult>) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => format!("{} command(s) failed", results.len()),
        };
        Self { message, results }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `writer`, followed by a newline.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let json = self.to_json()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    /// Write the report to stderr.
    pub fn emit(&self) -> Result<()> {
        self.write_to(&mut std::io::stderr().lock())
    }
}
