//! Diagnostic logging
//!
//! Events go to stderr so the report on stdout is never interleaved with
//! log lines.

use std::sync::Once;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        // Another subscriber may already be installed by an embedding binary.
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(stderr_layer)
            .try_init();
    });
}
