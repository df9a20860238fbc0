//! crates/logging-sink/src/sink/writer.rs
//! Line-oriented sink over any `io::Write`.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::Sink;
use crate::line_mode::LineMode;
use crate::record::Record;

/// Component prefix rendered in front of every message unless overridden.
pub const DEFAULT_PREFIX: &str = "InnoDB";

/// Marker rendered after the severity label of fatal records.
const FATAL_MARKER: &str = " [FATAL]";

/// Sink that renders records into an [`io::Write`] target in server-log form.
///
/// Each record becomes `<label> <prefix>: <message>`, where the label is the
/// severity's [`log_label`](crate::Severity::log_label) and fatal records
/// carry an additional ` [FATAL]` marker. The whole line is assembled first
/// and written with a single `write_all` while the writer's mutex is held, so
/// records emitted from different threads never interleave.
///
/// Write and flush failures are swallowed: a sink cannot refuse a record and
/// must never stand between a fatal record and process termination.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, Record, Severity, Sink, WriterSink};
///
/// let sink = WriterSink::with_parts(Vec::new(), "Aria", LineMode::WithoutNewline);
/// sink.emit(&Record::new(Severity::Fatal, b"log corrupt"));
///
/// assert_eq!(sink.into_inner(), b"[ERROR] [FATAL] Aria: log corrupt".to_vec());
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    prefix: Cow<'static, str>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink with the [`DEFAULT_PREFIX`] that appends a newline after each record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_parts(writer, DEFAULT_PREFIX, LineMode::WithNewline)
    }

    /// Creates a sink with the [`DEFAULT_PREFIX`] and the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self::with_parts(writer, DEFAULT_PREFIX, line_mode)
    }

    /// Creates a sink from an explicit prefix and [`LineMode`].
    ///
    /// An empty prefix drops the `<prefix>: ` part of the rendered line.
    #[must_use]
    pub fn with_parts(writer: W, prefix: impl Into<Cow<'static, str>>, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            prefix: prefix.into(),
            line_mode,
        }
    }

    /// Returns the component prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, record: &Record<'_>) -> Vec<u8> {
        let severity = record.severity();
        let message = record.message();

        let mut line = Vec::with_capacity(message.len() + self.prefix.len() + 24);
        line.extend_from_slice(severity.log_label().as_bytes());
        if severity.is_fatal() {
            line.extend_from_slice(FATAL_MARKER.as_bytes());
        }
        line.push(b' ');
        if !self.prefix.is_empty() {
            line.extend_from_slice(self.prefix.as_bytes());
            line.extend_from_slice(b": ");
        }
        line.extend_from_slice(message);
        if self.line_mode.append_newline() {
            line.push(b'\n');
        }
        line
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        writer.flush()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn emit(&self, record: &Record<'_>) {
        let line = self.render(record);
        let _ = self.write_line(&line);
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("prefix", &self.prefix)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
