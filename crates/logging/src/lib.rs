#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `tinylog` is a small leveled logger. Every message carries a severity tag,
//! a calendar timestamp and the time elapsed since the previous message, and
//! is written atomically to stdout (INFO) or stderr (everything else).
//! Alongside plain messages the crate offers named flag timers and a
//! single-line progress bar.
//!
//! # Design
//!
//! [`Logger`] owns two locks. The emission lock serialises the threshold, the
//! [`MessageFormatter`], the progress state and the [`Sink`]. The flag lock
//! guards the [`FlagTracker`] and is never held while emitting. Severities are
//! ordered so that a message is written iff `severity <= threshold`.
//!
//! Compile-time knobs are Cargo features: `max-level-*` sets a ceiling that
//! removes macro call sites above it and bounds [`Logger::set_level`],
//! `context-*` selects the call-site prefix added by the `log_*!` macros, and
//! `force-inline` inlines the emitters everywhere.
//!
//! # Invariants
//!
//! - Lines never interleave: one line is built then written with a single
//!   `write_all` while the emission lock is held.
//! - A CRITICAL message is flushed before the process exits with status 1.
//! - Output failures are swallowed; logging never fails its caller.
//!
//! # Examples
//!
//! ```
//! use tinylog::{CaptureBuffer, Logger, Severity, Sink};
//!
//! let out = CaptureBuffer::new();
//! let err = CaptureBuffer::new();
//! let logger = Logger::with_sink(Severity::Verbose, Sink::new(out.clone(), err.clone()));
//!
//! logger.add_flag("scan");
//! logger.log(Severity::Verbose, &[&"scanning ", &12, &" entries"]);
//! let elapsed = logger.release_flag("scan").unwrap();
//!
//! assert!(err.contents().starts_with("[VERBOSE]  "));
//! assert!(out.contents().contains("Flag 'scan' released after "));
//! assert!(elapsed.as_secs() < 5);
//! ```
//!
//! # See also
//!
//! - [`global`] for the process-wide handle.
//! - [`tracing_bridge`] (feature `tracing`) to route `tracing` events into a logger.

pub mod config;
pub mod context;
pub mod error;
pub mod flags;
pub mod format;
pub mod global;
mod line_mode;
mod logger;
mod macros;
pub mod progress;
mod severity;
pub mod sink;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use config::{LoggerConfig, STATIC_MAX_LEVEL};
pub use context::CallSite;
pub use error::{LoggerError, ParseSeverityError};
pub use flags::FlagTracker;
pub use format::{MessageFormatter, Preformatted};
pub use line_mode::LineMode;
pub use logger::{CRITICAL_EXIT_CODE, Logger};
pub use progress::{BAR_WIDTH, ProgressSnapshot, ProgressState};
pub use severity::{Severity, Stream};
pub use sink::{CaptureBuffer, Sink};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{TinyLayer, init_tracing, init_tracing_with_filter};
