//! Development-time tracing for debugging the core.
//!
//! Diagnostics only, controlled via `RUST_LOG`, written to stderr. Reporter
//! output is the embedding engine's product surface and never flows through
//! here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for development logging.
///
/// Reads the `RUST_LOG` env var, defaulting to `warn` when unset. Output:
/// stderr, compact format. Call once per process, from the embedding
/// engine's entry point or a test harness.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
