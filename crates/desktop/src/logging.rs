//! tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG wins over the configured filter; an unparsable filter falls back to the default
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::default_log_filter()))
}

pub fn init(configured: &str) {
    tracing_subscriber::registry()
        .with(build_filter(configured))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
