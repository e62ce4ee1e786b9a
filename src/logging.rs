//! Diagnostics go to stderr through `tracing`; stdout stays for the report.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BIKESHARE_LOG";

/// Install the global subscriber. The level comes from `BIKESHARE_LOG`
/// (e.g. `debug`, `bikeshare=info`) and defaults to `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
