//! Application logging functionality
//!
//! Sets up `tracing` output to stderr and, when enabled, to a dated log
//! file under ~/.config/strokedata/logs/

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config_file::config_dir;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    logs_dir().join(format!("strokedata-{}.log", timestamp))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {:?}", logs_dir))?;
    Ok(())
}

/// Default level from `-v`/`-q`. `RUST_LOG` wins when set.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must be held until
/// the program exits.
pub fn init(verbose: u8, quiet: bool, log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 1);

    let (file_layer, guard) = if log_to_file {
        initialize_logs_directory()?;
        let path = current_log_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}
