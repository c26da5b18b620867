use anyhow::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix for the rolling log files
pub const LOG_FILE_NAME: &str = "sms-gate.log";

/// Initialize the logging system
/// Logs will be written to `log_dir` only (no console output), so the host's
/// own stdout stays clean
pub fn init_logging(log_dir: impl AsRef<Path>) -> Result<()> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    // File appender - daily rotation
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO level, can be overridden with RUST_LOG env var
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging system initialized");
    tracing::info!("Log files location: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(())
}

/// Check if the logs directory exists
pub fn logs_dir_exists(log_dir: impl AsRef<Path>) -> bool {
    log_dir.as_ref().exists()
}
