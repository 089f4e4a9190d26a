//! Tracing/logging initialization.
//!
//! The core logs its lifecycle decisions (fallback activation, stale-result
//! discard, booking phases); the embedding frontend decides whether to
//! install this subscriber or its own.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
