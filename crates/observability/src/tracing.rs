//! Tracing initialization for test and bench runs.
//!
//! No service process lives in this workspace, so the output format favors
//! human eyes over log pipelines.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Idempotent: later callers lose the `try_init` race and become no-ops,
/// which is exactly what concurrent test binaries need.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Compact single-line output, level configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
