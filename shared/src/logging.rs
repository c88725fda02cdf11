//! Logging setup
//!
//! Logs go to stderr; stdout belongs to the plugin handshake. Filtering
//! follows the `RUST_LOG` environment variable and defaults to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the default tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
