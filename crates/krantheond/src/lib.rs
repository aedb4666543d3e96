//! Krantheon daemon library - exposes modules for testing.

pub mod config;
pub mod pipeline;
pub mod routes;
pub mod server;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. RUST_LOG wins over the configured level.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
