//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "SHEET_TABLE_LOG";

/// Install a formatted subscriber for the process.
///
/// Safe to call more than once; returns `false` when a global subscriber
/// was already installed.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
