//! `log` adapter for add-on functions
//!
//! This crate adapts [`log`](https://docs.rs/log) to add-on functions. `log` is a standard logging crate,
//! used widely across the ecosystem.
//!
//! Records are written one per line to the console, where the platform picks them up:
//! `LEVEL TIMESTAMP module file:line message`.
//!
//! You are likely to be interested in the sibling crates:
//! * `addon-functions`: Payload encoding, responses and the `invoke!` entrypoint.
//! * `addon-functions-host`: Interfaces and tools for the hosting platform.

use addon_functions_host::logging::LogDestination;
use log::SetLoggerError;
use thiserror::Error;

mod console_logger;

/// Which logging mode to use?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Write to standard output.
    #[default]
    Stdout,
    /// Write to standard error.
    Stderr,
}

impl From<LogMode> for LogDestination {
    fn from(mode: LogMode) -> Self {
        match mode {
            LogMode::Stdout => LogDestination::Stdout,
            LogMode::Stderr => LogDestination::Stderr,
        }
    }
}

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize console logger: {cause}")]
    ConsoleInit { cause: SetLoggerError },
}

/// Initializes the logging system with the specified log level and mode.
///
/// Only the first call installs a logger. Later calls return [LogConfigError::ConsoleInit].
pub fn configure_logging(level: log::LevelFilter, mode: LogMode) -> Result<(), LogConfigError> {
    console_logger::ConsoleLog::init(level, mode.into())
        .map_err(|e| LogConfigError::ConsoleInit { cause: e })
}
