//! crates/logging/src/macros.rs
//! Call-site macros: `log_trace!` through `log_critical!`.
//!
//! Each macro takes a logger expression followed by any number of `Display`
//! arguments, which are concatenated without separators. The call-site
//! context selected by the `context-*` features is prefixed.
//!
//! Without a compile-time ceiling the macros go through
//! [`Logger::log`](crate::Logger::log) and obey the runtime threshold. With a
//! `max-level-*` feature enabled, macros above the ceiling compile to nothing
//! and the remaining ones call the direct emitters.
//!
//! ```
//! use tinylog::{CaptureBuffer, Logger, Severity, Sink, log_info, log_debug};
//!
//! let out = CaptureBuffer::new();
//! let logger = Logger::with_sink(Severity::Info, Sink::new(out.clone(), CaptureBuffer::new()));
//!
//! let files = 3;
//! log_info!(logger, "loaded ", files, " files");
//! log_debug!(logger, "not shown at INFO");
//!
//! assert!(out.contents().trim_end().ends_with("loaded 3 files"));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __tinylog_at {
    ($severity:ident, $emitter:ident, $logger:expr $(, $arg:expr)*) => {
        if $crate::Severity::$severity.passes($crate::config::EFFECTIVE_MAX_LEVEL) {
            if $crate::config::CEILING_CONFIGURED {
                $logger.$emitter(&[&$crate::call_site!() $(, &$arg)*]);
            } else {
                $logger.log($crate::Severity::$severity, &[&$crate::call_site!() $(, &$arg)*]);
            }
        }
    };
}

/// Logs a TRACE message.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Trace, trace, $logger $(, $arg)*)
    };
}

/// Logs a DEBUG message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Debug, debug, $logger $(, $arg)*)
    };
}

/// Logs a VERBOSE message.
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Verbose, verbose, $logger $(, $arg)*)
    };
}

/// Logs an INFO message to the standard stream.
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Info, info, $logger $(, $arg)*)
    };
}

/// Logs a WARNING message.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Warning, warning, $logger $(, $arg)*)
    };
}

/// Logs an ERROR message.
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Error, error, $logger $(, $arg)*)
    };
}

/// Logs a CRITICAL message and terminates the process.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__tinylog_at!(Critical, critical, $logger $(, $arg)*)
    };
}
