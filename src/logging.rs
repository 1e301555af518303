//! Tracing setup
//!
//! Events go to stderr so report and export output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive when neither `RUST_LOG` nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "expense_insights=warn";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used. Calling
/// this more than once is a no-op.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
