//! File logging.
//!
//! Logs go to `${SENTI_HOME}/logs/senti.log.<date>` so they never interleave
//! with the TUI or with command output. `SENTI_LOG` takes precedence over
//! the configured level and accepts full `EnvFilter` directives.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "SENTI_LOG";

const LOG_FILE_PREFIX: &str = "senti.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// The returned guard flushes buffered lines on drop; hold it for the life
/// of the process.
///
/// # Errors
/// Returns an error if the filter is invalid, the logs directory cannot be
/// created, or a subscriber is already installed.
pub fn init(level: &str) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), level)
}

/// Installs the global subscriber writing daily files under `dir`.
///
/// # Errors
/// See [`init`].
pub fn init_in(dir: &Path, level: &str) -> Result<WorkerGuard> {
    let filter = build_filter(level)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(level.trim()).with_context(|| format!("Invalid log level: {level}"))
}
