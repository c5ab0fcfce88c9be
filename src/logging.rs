//! Debug logging
//!
//! The interactive session owns the terminal, so logs never go to stdout or
//! stderr. With `--debug` they are appended to a file in the temp directory.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::utils::get_debug_log_path;

const DEFAULT_FILTER: &str = "currency_converter=debug";

/// Install the file logger when `debug` is set
///
/// Returns the log file path if logging was enabled. `RUST_LOG` overrides the
/// default filter.
pub fn init(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        return Ok(None);
    }

    let path = get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!("Debug mode enabled, logging to {}", path.display());
    Ok(Some(path))
}
