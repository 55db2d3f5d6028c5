//! Logging initialization and configuration.
//!
//! Log output goes to stderr so a successful run prints nothing on stdout and
//! the JSON error report stays machine-parseable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// An explicit `level` (from `--log-level`) takes precedence; otherwise the
/// `RUST_LOG` environment variable is consulted, and if neither is set the
/// filter defaults to `gatecheck=warn` so hook runs stay quiet.
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber has
/// already been set.
pub fn init(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init(level: Option<&str>) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
}

fn filter_for(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(format!("gatecheck={level}")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gatecheck=warn")),
    }
}
