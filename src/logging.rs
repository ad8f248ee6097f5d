//! Diagnostic logging to a file.
//!
//! The TUI owns stdout, so `tracing` output goes to a log file in the data
//! directory. The filter comes from `POSTBOARD_LOG` (`EnvFilter` syntax)
//! and defaults to `info`.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV_VAR;

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `POSTBOARD_LOG`, falling back to `info`.
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending to `log_path`.
///
/// Creates the parent directory if needed. Fails if the file cannot be
/// opened or a global subscriber is already set.
pub fn init_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
