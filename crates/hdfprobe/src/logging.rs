//! Diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HDFPROBE_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install a formatting subscriber, once.
///
/// The filter comes from `HDFPROBE_LOG` (e.g. `hdfprobe_superblock=trace`)
/// and defaults to `warn`. If the host already installed a global
/// subscriber, that one is kept.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
        {
            tracing::trace!("logging initialized");
        }
    });
}
