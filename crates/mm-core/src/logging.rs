//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `MINIMARK_LOG=minimark=debug`.
pub const LOG_ENV: &str = "MINIMARK_LOG";

/// Install the global subscriber.
///
/// `MINIMARK_LOG` wins when set and valid; otherwise `default_directive` is
/// used. Calling this more than once is a no-op.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
