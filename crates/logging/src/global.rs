//! crates/logging/src/global.rs
//! Process-wide logger handle.
//!
//! Explicit [`Logger`] instances are preferred; the global handle exists for
//! code that cannot thread a logger through its call graph.

use std::sync::OnceLock;

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::logger::Logger;
use crate::sink::Sink;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger writing to stdout/stderr.
///
/// Must run before the first call to [`logger`]; afterwards it returns
/// [`LoggerError::AlreadyInitialized`] and leaves the existing logger in place.
pub fn init(config: LoggerConfig) -> Result<&'static Logger, LoggerError> {
    init_with_sink(config, Sink::console())
}

/// Installs the process-wide logger writing to `sink`.
pub fn init_with_sink(config: LoggerConfig, sink: Sink) -> Result<&'static Logger, LoggerError> {
    let mut installed = false;
    let logger = GLOBAL.get_or_init(|| {
        installed = true;
        Logger::from_config(config, sink)
    });

    if installed {
        Ok(logger)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

/// Returns the process-wide logger, creating a TRACE-level console logger on first use.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Returns the process-wide logger if it has been created.
pub fn try_logger() -> Option<&'static Logger> {
    GLOBAL.get()
}
