use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Installs the application's `tracing` subscriber.
///
/// Events go to the console (with colors) and to `<log_dir>/<stem>.log`
/// (plain text). The log file is truncated every time a `Logger` is created.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_dir`: Existing directory where the log file should be created.
    /// - `file_stem`: Name of the log file, without extension.
    ///
    /// # Returns
    /// A new `Logger` instance, or `LoggerError::InvalidPath` if `log_dir` is not a directory.
    pub fn new(log_dir: &Path, file_stem: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }

        let sanitized = file_stem.replace([':', '/', '\\'], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger { log_file })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Registers the global subscriber.
    ///
    /// `RUST_LOG` wins over `default_level` when it is set. Fails if a
    /// subscriber was already installed in this process.
    pub fn install(&self, default_level: &str) -> Result<(), LoggerError> {
        let file = OpenOptions::new().append(true).open(&self.log_file)?;
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_target(false),
            )
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
            .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))?;

        tracing::debug!(file = %self.log_file.display(), "logging installed");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(String),
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
    #[error("Logger already installed: {0}")]
    AlreadyInstalled(String),
}
