//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::Result;

/// Initialize the logging subsystem
///
/// The TUI owns stdout, so logs are written to
/// `~/.local/share/postdeck/logs/`. Log level is controlled by the
/// `POSTDECK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// POSTDECK_LOG=debug cargo run
/// POSTDECK_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "postdeck.log");

    // Default to info, allow override via POSTDECK_LOG
    let env_filter = EnvFilter::try_from_env("POSTDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("postdeck=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("postdeck").join("logs")
}
