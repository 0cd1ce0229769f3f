//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::VERSION;

static INIT: Once = Once::new();

/// Default filter when `LRW_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "lrw=info";

/// Initialize the tracing/logging system.
///
/// Reads the `LRW_LOG` environment variable for per-module log levels.
/// Format: `LRW_LOG=lrw_xapi=debug,lrw_session=warn`
///
/// Falls back to `lrw=info` if `LRW_LOG` is not set or is invalid.
///
/// This function is idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LRW_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

/// Initialize tracing from the observability config. `LRW_LOG` still wins
/// when set; otherwise `log_level` applies to every module.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("LRW_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, config.json_logs);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber installed by the host process takes precedence.
        if result.is_ok() {
            ::tracing::debug!(version = VERSION, json, "tracing initialized");
        }
    });
}
