//! crates/logging/src/logger.rs
//! The [`Logger`]: level gate, dispatch, emitters, flags and progress.

use std::fmt::{self, Display};
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::{LoggerConfig, STATIC_MAX_LEVEL};
use crate::error::LoggerError;
use crate::flags::FlagTracker;
use crate::format::{self, MessageFormatter};
use crate::line_mode::LineMode;
use crate::progress::ProgressState;
use crate::severity::{Severity, Stream};
use crate::sink::Sink;

/// Exit status used when a CRITICAL message terminates the process.
pub const CRITICAL_EXIT_CODE: i32 = 1;

/// State guarded by the emission lock.
#[derive(Debug)]
struct Emission {
    level: Severity,
    formatter: MessageFormatter,
    progress: ProgressState,
    sink: Sink,
}

impl Emission {
    fn write(&mut self, severity: Severity, args: &[&dyn Display]) {
        let mut line = String::from(severity.tag());
        line.push_str(&self.formatter.format(args));
        // A logger must not fail its caller; write errors are dropped.
        let _ = self
            .sink
            .write_line(severity.stream(), &line, LineMode::Newline);
    }

    fn log(&mut self, severity: Severity, args: &[&dyn Display]) {
        if !severity.passes(self.level) {
            return;
        }
        match severity {
            Severity::Trace
            | Severity::Debug
            | Severity::Verbose
            | Severity::Info
            | Severity::Warning
            | Severity::Error => self.write(severity, args),
            Severity::Critical => self.terminate(args),
            Severity::Off => {}
        }
    }

    fn terminate(&mut self, args: &[&dyn Display]) -> ! {
        self.write(Severity::Critical, args);
        let _ = self.sink.flush();
        process::exit(CRITICAL_EXIT_CODE)
    }
}

/// Leveled, timestamped, thread-safe logger.
///
/// Every line is written as `[TAG]` padded to eleven columns, a calendar
/// timestamp, the time elapsed since the previous message of any severity and
/// the concatenated arguments. INFO goes to the standard stream, all other
/// severities to the diagnostic stream.
///
/// Two locks are used. The emission lock covers the level, the formatter,
/// the progress state and the sink. The flag lock covers the flag map only and
/// is always released before the emission lock is taken.
///
/// ```
/// use tinylog::{CaptureBuffer, Logger, Severity, Sink};
///
/// let out = CaptureBuffer::new();
/// let err = CaptureBuffer::new();
/// let logger = Logger::with_sink(Severity::Info, Sink::new(out.clone(), err.clone()));
///
/// logger.log(Severity::Info, &[&"loaded ", &3, &" files"]);
/// logger.log(Severity::Debug, &[&"suppressed"]);
///
/// assert!(out.contents().ends_with(" s loaded 3 files\n"));
/// assert!(err.contents().is_empty());
/// ```
pub struct Logger {
    emission: Mutex<Emission>,
    flags: FlagTracker,
    ceiling: Option<Severity>,
}

impl Logger {
    /// Creates a console logger (stdout/stderr) with the given threshold.
    #[must_use]
    pub fn new(level: Severity) -> Self {
        Self::with_sink(level, Sink::console())
    }

    /// Creates a logger writing to `sink`.
    #[must_use]
    pub fn with_sink(level: Severity, sink: Sink) -> Self {
        Self::from_config(LoggerConfig::with_level(level), sink)
    }

    /// Creates a logger whose [`set_level`](Self::set_level) rejects levels above `ceiling`.
    ///
    /// A compile-time ceiling, when configured, still applies if it is lower.
    #[must_use]
    pub fn with_ceiling(level: Severity, ceiling: Severity, sink: Sink) -> Self {
        Self::from_config(LoggerConfig::with_level(level).with_ceiling(ceiling), sink)
    }

    /// Creates a logger from a full configuration.
    ///
    /// The compile-time ceiling, if any, bounds the configured one and applies
    /// even when `config.ceiling` is `None`.
    #[must_use]
    pub fn from_config(config: LoggerConfig, sink: Sink) -> Self {
        Self {
            emission: Mutex::new(Emission {
                level: config.level,
                formatter: MessageFormatter::new(),
                progress: ProgressState::new(),
                sink,
            }),
            flags: FlagTracker::new(),
            ceiling: match (config.ceiling, STATIC_MAX_LEVEL) {
                (Some(requested), Some(compiled)) => Some(requested.min(compiled)),
                (requested, compiled) => requested.or(compiled),
            },
        }
    }

    fn lock(&self) -> MutexGuard<'_, Emission> {
        self.emission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.lock().level
    }

    /// Upper bound enforced by [`set_level`](Self::set_level), if any.
    #[must_use]
    pub const fn ceiling(&self) -> Option<Severity> {
        self.ceiling
    }

    /// Reports whether a message of `severity` would be emitted by [`log`](Self::log).
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::Off && severity.passes(self.level())
    }

    /// Changes the threshold.
    ///
    /// A level above the configured ceiling is rejected: an ERROR is written
    /// whatever the current threshold, the threshold is left unchanged and the
    /// rejection is returned.
    pub fn set_level(&self, level: Severity) -> Result<(), LoggerError> {
        let mut emission = self.lock();

        if let Some(ceiling) = self.ceiling {
            if level > ceiling {
                let error = LoggerError::LevelAboveCeiling {
                    requested: level,
                    ceiling,
                };
                emission.write(Severity::Error, &[&error]);
                return Err(error);
            }
        }

        emission.level = level;
        Ok(())
    }

    /// Emits `args` at `severity` when it passes the current threshold.
    ///
    /// [`Severity::Off`] is not a message severity and is ignored. A CRITICAL
    /// message terminates the process after being written.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn log(&self, severity: Severity, args: &[&dyn Display]) {
        self.lock().log(severity, args);
    }

    /// Emits a TRACE message, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn trace(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Trace, args);
    }

    /// Emits a DEBUG message, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn debug(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Debug, args);
    }

    /// Emits a VERBOSE message, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn verbose(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Verbose, args);
    }

    /// Emits an INFO message to the standard stream, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn info(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Info, args);
    }

    /// Emits a WARNING message, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn warning(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Warning, args);
    }

    /// Emits an ERROR message, bypassing the threshold.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn error(&self, args: &[&dyn Display]) {
        self.lock().write(Severity::Error, args);
    }

    /// Emits a CRITICAL message and terminates the process with a failure status.
    ///
    /// The emission lock is held until exit so no other line can follow.
    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    pub fn critical(&self, args: &[&dyn Display]) -> ! {
        self.lock().terminate(args)
    }

    /// Arms the flag `name` at the current instant.
    ///
    /// Re-arming an existing flag logs a WARNING and restarts its timer.
    /// Returns `true` when a flag was re-armed.
    pub fn add_flag(&self, name: &str) -> bool {
        let replaced = self.flags.add(name);
        if replaced {
            self.log(
                Severity::Warning,
                &[&"Flag '", &name, &"' already exists and will be overwritten."],
            );
        }
        replaced
    }

    /// Releases the flag `name`, logging at INFO how long it was armed.
    ///
    /// An unknown flag logs an ERROR and is returned as
    /// [`LoggerError::FlagNotFound`]; no other flag is affected.
    pub fn release_flag(&self, name: &str) -> Result<Duration, LoggerError> {
        match self.flags.release(name) {
            Some(elapsed) => {
                let seconds = format::seconds_millis(elapsed);
                self.log(
                    Severity::Info,
                    &[&"Flag '", &name, &"' released after ", &seconds, &" seconds."],
                );
                Ok(elapsed)
            }
            None => {
                let error = LoggerError::FlagNotFound(name.to_owned());
                self.log(Severity::Error, &[&error]);
                Err(error)
            }
        }
    }

    /// Reports whether the flag `name` is armed.
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Number of armed flags.
    #[must_use]
    pub fn active_flags(&self) -> usize {
        self.flags.len()
    }

    /// Redraws the progress bar for `current` out of `total` iterations if it changed visibly.
    ///
    /// The bar goes to the standard stream ending with a carriage return.
    /// Returns `true` when the bar was redrawn.
    pub fn display_progress(&self, current: usize, total: usize) -> bool {
        let mut emission = self.lock();
        let Some(bar) = emission.progress.advance(current, total) else {
            return false;
        };
        let _ = emission
            .sink
            .write_line(Stream::Standard, &bar, LineMode::CarriageReturn);
        true
    }

    /// Forgets the displayed progress so the next call redraws.
    pub fn reset_progress(&self) {
        self.lock().progress.reset();
    }

    /// Ends the progress line with a newline and forgets the displayed progress.
    ///
    /// Later log lines then start on a fresh line instead of overwriting the bar.
    pub fn finish_progress(&self) {
        let mut emission = self.lock();
        emission.progress.reset();
        let _ = emission
            .sink
            .write_line(Stream::Standard, "", LineMode::Newline);
    }

    /// Flushes both output streams.
    pub fn flush(&self) {
        let _ = self.lock().sink.flush();
    }
}

impl Default for Logger {
    /// Console logger at TRACE.
    fn default() -> Self {
        Self::from_config(LoggerConfig::default(), Sink::console())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("ceiling", &self.ceiling)
            .field("active_flags", &self.active_flags())
            .finish_non_exhaustive()
    }
}
