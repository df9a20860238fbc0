//! crates/logging/src/logger.rs
//! The accumulator that buffers a message and emits it when dropped.

use std::fmt;
use std::io;
use std::marker::PhantomData;

use logging_sink::{Record, Severity, Sink, global_sink};

use crate::fatal::terminate;

/// Buffers a diagnostic message and hands it to a sink when dropped.
///
/// A `Logger` is created with a fixed [`Severity`] and receives any number of
/// appends. Nothing reaches the sink until the value goes out of scope; at
/// that point the accumulated bytes are emitted as a single [`Record`],
/// exactly once, whether the scope ends normally, through an early return or
/// while a panic unwinds. Empty messages are emitted as well.
///
/// When the severity is [`Severity::Fatal`] (only reachable through
/// [`fatal_or_error`](crate::fatal_or_error) or [`Logger::with_sink`]), the
/// drop aborts the process right after the sink accepted the record. Use
/// [`Fatal`](crate::Fatal) when the call site should be statically known not
/// to return.
///
/// The buffer is not synchronized, so `Logger` is neither `Send` nor `Sync`.
///
/// # Examples
///
/// The usual form is an unnamed temporary that emits at the end of the
/// statement:
///
/// ```
/// use logging::Logger;
/// use logging_sink::{MemorySink, Severity};
///
/// let sink = MemorySink::new();
/// Logger::with_sink(Severity::Warning, &sink)
///     .append("page ")
///     .append(42)
///     .append(" is not in the buffer pool");
///
/// let records = sink.take();
/// assert_eq!(records[0].text(), "page 42 is not in the buffer pool");
/// assert_eq!(records[0].severity, Severity::Warning);
/// ```
pub struct Logger<'s> {
    severity: Severity,
    buf: Vec<u8>,
    sink: &'s dyn Sink,
    _not_send: PhantomData<*const ()>,
}

impl Logger<'static> {
    /// Creates an accumulator that emits to the process-wide sink.
    #[must_use = "the message is emitted when the logger is dropped"]
    pub fn new(severity: Severity) -> Self {
        Self::with_sink(severity, global_sink())
    }
}

impl<'s> Logger<'s> {
    /// Creates an accumulator that emits to `sink`.
    #[must_use = "the message is emitted when the logger is dropped"]
    pub fn with_sink(severity: Severity, sink: &'s dyn Sink) -> Self {
        Self {
            severity,
            buf: Vec::new(),
            sink,
            _not_send: PhantomData,
        }
    }

    /// Returns the severity fixed at construction.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Appends the [`Display`](fmt::Display) rendering of `value`.
    pub fn append<T>(&mut self, value: T) -> &mut Self
    where
        T: fmt::Display,
    {
        // Writing into the buffer cannot fail; only a broken Display impl can.
        let _ = fmt::Write::write_fmt(self, format_args!("{value}"));
        self
    }

    /// Appends `bytes` verbatim.
    ///
    /// No terminator is assumed and the bytes need not be valid UTF-8.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub(crate) fn emit(&self) {
        self.sink.emit(&Record::new(self.severity, &self.buf));
    }
}

impl fmt::Write for Logger<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl io::Write for Logger<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for Logger<'_> {
    fn drop(&mut self) {
        self.emit();
        if self.severity.is_fatal() {
            terminate();
        }
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("severity", &self.severity)
            .field("len", &self.buf.len())
            .finish_non_exhaustive()
    }
}
