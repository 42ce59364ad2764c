//! Logging through `tracing`, always on stderr.
//!
//! Stdout carries the CSV, so nothing here ever prints to it.
//!
//! The level is read from `JSON2CSV_LOG`, then `RUST_LOG`, and defaults
//! to `warn`:
//!
//! ```bash
//! JSON2CSV_LOG=debug json2csv rules.json users https://api.example.com/users
//! ```

use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "JSON2CSV_LOG";

/// Filter used when neither variable is set
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    info!("{}", msg.into());
}

pub fn log_success(msg: impl Into<String>) {
    info!(outcome = "success", "{}", msg.into());
}

pub fn log_warning(msg: impl Into<String>) {
    warn!("{}", msg.into());
}

pub fn log_error(msg: impl Into<String>) {
    error!("{}", msg.into());
}
