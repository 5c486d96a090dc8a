//! Log setup.
//!
//! The terminal belongs to the renderer, so events go to a file:
//! `TETRISSH_LOG_PATH` names it and `TETRISSH_LOG` holds the filter
//! (default `info`). Without a path nothing is installed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the file subscriber. Returns whether one was installed.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var_os("TETRISSH_LOG_PATH") else {
        return Ok(false);
    };
    let filter = std::env::var("TETRISSH_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(&filter).with_context(|| format!("bad TETRISSH_LOG: {filter}"))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;
    Ok(true)
}
