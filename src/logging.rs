//! Log subscriber setup.

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only command output. The filter is
/// read from `CONFSTASH_LOG`, defaulting to `warn`. Calling this twice is a
/// no-op.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .try_init();
}
