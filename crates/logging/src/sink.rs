//! crates/logging/src/sink.rs
//! Output streams shared by every emitter of a [`Logger`](crate::Logger).

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::line_mode::LineMode;
use crate::severity::Stream;

type BoxedWriter = Box<dyn Write + Send>;

/// Pair of writers backing the standard and diagnostic streams.
///
/// Each call to [`write_line`](Self::write_line) renders the text and its
/// [`LineMode`] terminator into a single buffer, writes it with one
/// `write_all`, and flushes, so lines reach the destination whole.
pub struct Sink {
    standard: BoxedWriter,
    diagnostic: BoxedWriter,
}

impl Sink {
    /// Creates a sink over arbitrary writers.
    #[must_use]
    pub fn new<S, D>(standard: S, diagnostic: D) -> Self
    where
        S: Write + Send + 'static,
        D: Write + Send + 'static,
    {
        Self {
            standard: Box::new(standard),
            diagnostic: Box::new(diagnostic),
        }
    }

    /// Sink writing INFO and the progress bar to stdout and everything else to stderr.
    #[must_use]
    pub fn console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    fn writer_mut(&mut self, stream: Stream) -> &mut BoxedWriter {
        match stream {
            Stream::Standard => &mut self.standard,
            Stream::Diagnostic => &mut self.diagnostic,
        }
    }

    /// Writes `text` followed by the `line_mode` terminator and flushes.
    pub fn write_line(&mut self, stream: Stream, text: &str, line_mode: LineMode) -> io::Result<()> {
        let terminator = line_mode.terminator();
        let mut buffer = Vec::with_capacity(text.len() + terminator.len());
        buffer.extend_from_slice(text.as_bytes());
        buffer.extend_from_slice(terminator);

        let writer = self.writer_mut(stream);
        writer.write_all(&buffer)?;
        writer.flush()
    }

    /// Flushes both streams.
    pub fn flush(&mut self) -> io::Result<()> {
        self.standard.flush()?;
        self.diagnostic.flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

/// Cloneable in-memory writer; every clone appends to the same buffer.
///
/// Useful for embedding the logger in tests or capturing output for display
/// elsewhere.
///
/// ```
/// use tinylog::{CaptureBuffer, Logger, Severity, Sink};
///
/// let out = CaptureBuffer::new();
/// let err = CaptureBuffer::new();
/// let logger = Logger::with_sink(Severity::Trace, Sink::new(out.clone(), err.clone()));
///
/// logger.info(&[&"ready"]);
/// assert!(out.contents().starts_with("[INFO]     "));
/// assert!(err.contents().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured bytes decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Captured output split into newline-terminated lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
