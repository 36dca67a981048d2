//! Global `tracing` subscriber setup for programs built on this library.

use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
    util::TryInitError,
};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Maps a `-v` count to a level filter: 0 warn, 1 info, 2 debug, 3+ trace.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a compact stderr logger, plus a plain-text file logger if `log_file` is set.
pub fn setup_logging(
    verbosity: u8,
    quiet: bool,
    log_file: Option<&Path>,
) -> Result<(), LoggingError> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| LoggingError::LogFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
