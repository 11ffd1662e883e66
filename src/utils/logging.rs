//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging, with `default_level` applying when RUST_LOG is unset
pub fn setup_logging(default_level: &str) {
    // try_init: a second call (e.g. from tests) is a no-op rather than a panic
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
