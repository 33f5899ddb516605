//! Tracing subscriber setup.
//!
//! The game owns the terminal, so logs never go to stdout or stderr. They are
//! appended to `dungeon.log` in the save directory instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "dungeon.log";

/// Parse a filter directive, falling back to `info` when it is malformed.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<dir>/dungeon.log`.
///
/// # Returns
/// The log file path.
///
/// # Errors
/// Fails if the directory or file cannot be created, or a global subscriber
/// is already installed.
pub fn init_logging(dir: &Path, directive: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: {}", path.display());
    Ok(path)
}
