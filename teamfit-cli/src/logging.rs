//! Diagnostic output for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here forwards those records to stderr so stdout stays pure JSON.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `teamfit_scorer=debug`.
pub const LOG_ENV: &str = "TEAMFIT_LOG";

/// Filter applied when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// Installing twice is harmless: the second call keeps the first subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("log subscriber already installed");
    }
}
