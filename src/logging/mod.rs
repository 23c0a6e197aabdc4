// Logging setup
//
// tracing + tracing-subscriber fmt output. RUST_LOG wins over the
// --log-level flag when both are present.

use tracing_subscriber::EnvFilter;

/// Default filter when neither RUST_LOG nor --log-level is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter from RUST_LOG, else `level`, else `info`.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Call once, at startup.
pub fn init_tracing(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .init();
}
