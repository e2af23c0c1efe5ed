use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::model::config::LogConfig;

/// Where log output may go for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The TUI owns the terminal: file only
    Tui,
    /// One-shot CLI output: file if configured, else warnings to stderr
    Cli,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Install the global tracing subscriber. Returns false when nothing was
/// installed (TUI mode without a log file, or a subscriber already set).
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<bool, LogError> {
    if let Some(file) = &config.file {
        let path = PathBuf::from(file);
        let handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::OpenError { path, source: e })?;
        let installed = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::from(config.level))
            .with_ansi(false)
            .with_writer(Mutex::new(handle))
            .try_init()
            .is_ok();
        return Ok(installed);
    }

    match target {
        LogTarget::Tui => Ok(false),
        LogTarget::Cli => Ok(tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init()
            .is_ok()),
    }
}
