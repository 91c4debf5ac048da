//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::DEFAULT_LOG_FILTER;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `MILAN_LOG=milan_koota=debug`.
pub const LOG_ENV: &str = "MILAN_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr.
///
/// `MILAN_LOG` wins over `config_filter`; an unparsable directive falls back
/// to `milan=info`. Later calls are no-ops.
pub fn init_tracing(config_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(config_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
