//! Tracing setup for NearGuard binaries.
//!
//! Per-sample diagnostics (distance publication, paused frames) sit at trace
//! level so a default `info` filter stays quiet between warnings. `RUST_LOG`
//! overrides the configured level as usual.

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from logging config.
///
/// Later calls are no-ops: the first subscriber installed wins.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        let config = LoggingConfig::default();
        init_logging(&config);
        // Second call must not panic on the already-installed subscriber.
        init_logging(&config);
    }
}
