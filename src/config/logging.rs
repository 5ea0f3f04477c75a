// src/config/logging.rs
//! Tracing setup. Output goes to a file since the terminal belongs to the UI.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::Level;

/// Install a global subscriber appending to `log_file`.
///
/// Without a log file no subscriber is installed and events are dropped.
pub fn init_logging(log_file: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")
}
