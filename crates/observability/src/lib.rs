//! Shared tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Emits JSON log lines, filtered by `RUST_LOG` (default `info`). Safe to
/// call more than once: later calls become no-ops, so the binary and the
/// test harness can both invoke it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
