//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to the app data
//! directory, keeping the previous session's log as app.log.1.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. The previous session's log is rotated to
/// app.log.1 on startup so one prior session stays inspectable.
pub fn init_logging() -> Result<()> {
    let log_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("BadgeBuster");
    std::fs::create_dir_all(&log_dir)?;

    rotate_previous_log(&log_dir.join("app.log"))?;

    // Rotation is handled above, once per startup, so the appender itself
    // never rotates
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(std::io::Error::other)?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(std::io::Error::other)?;

    tracing::info!("Badge Buster v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Move the previous session's log to app.log.1, replacing any older one
fn rotate_previous_log(log_path: &Path) -> Result<()> {
    if log_path.exists() {
        std::fs::rename(log_path, log_path.with_extension("log.1"))?;
    }
    Ok(())
}
