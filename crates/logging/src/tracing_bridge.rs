//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a [`Logger`].
//!
//! [`TinyLayer`] is a `tracing-subscriber` layer that turns every event into a
//! logger message at the matching severity. The logger's own threshold still
//! decides what is written, so `tracing::debug!` is silent on a logger set to
//! INFO.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tinylog::{Severity, init_tracing};
//!
//! init_tracing(tinylog::global::logger())?;
//!
//! tracing::info!(target: "loader", files = 3, "index ready");
//! // [INFO]     Thu Jul 31 14:02:09 2025 +0.004 s loader: index ready files=3
//! ```

use std::fmt::{self, Write as _};
use std::ops::Deref;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::logger::Logger;
use crate::severity::Severity;

/// A tracing layer forwarding events to a [`Logger`].
///
/// `L` is any shared handle to a logger, typically `&'static Logger` for the
/// process-wide instance or `Arc<Logger>`.
pub struct TinyLayer<L = &'static Logger> {
    logger: L,
}

impl<L> TinyLayer<L>
where
    L: Deref<Target = Logger>,
{
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// The logger events are forwarded to.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a tracing level onto a logger severity.
    ///
    /// `tracing` has no level above ERROR, so CRITICAL is never produced and an
    /// event can never terminate the process.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }
}

impl<S, L> Layer<S> for TinyLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.logger.log(
            severity,
            &[&metadata.target(), &": ", &visitor.message, &visitor.fields],
        );
    }
}

/// Collects the `message` field and renders the others as ` key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a global tracing subscriber forwarding every event to `logger`.
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(logger: &'static Logger) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TinyLayer::new(logger))
        .try_init()
}

/// Like [`init_tracing`], with an additional filter layer (for example an
/// `EnvFilter`) applied before events reach the logger.
pub fn init_tracing_with_filter<F>(logger: &'static Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(TinyLayer::new(logger))
        .try_init()
}
