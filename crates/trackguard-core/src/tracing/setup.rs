//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the trackguard tracing/logging system.
///
/// Reads the `TRACKGUARD_LOG` environment variable for per-target log levels.
/// Format: `TRACKGUARD_LOG=trackguard_analysis::verifier=debug,trackguard=info`
///
/// Falls back to `trackguard=info` if `TRACKGUARD_LOG` is not set or is invalid.
///
/// Idempotent; a subscriber installed by the host application is left alone.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
