//! crates/logging/src/fatal.rs
//! Fatal diagnostics and process termination.

use std::fmt;
use std::io;

use logging_sink::{Severity, Sink, global_sink};

use crate::logger::Logger;

/// Terminates the process immediately.
///
/// Destructors of outer scopes do not run and buffered standard streams are
/// not flushed. Sinks flush their own output before this point.
pub fn terminate() -> ! {
    std::process::abort()
}

/// Accumulator for a fatal diagnostic.
///
/// Behaves like a [`Logger`] fixed at [`Severity::Fatal`]: appends are
/// buffered and, once the message is handed to the sink, the process is
/// aborted. [`abort`](Self::abort) performs both steps and is typed `!`, so
/// the compiler treats code after it as unreachable. Dropping a `Fatal`
/// without calling `abort` (including during unwinding) has the same effect.
///
/// ```no_run
/// use logging::fatal;
///
/// fn check_page(checksum_ok: bool) -> u32 {
///     if !checksum_ok {
///         fatal().append("page checksum mismatch").abort();
///     }
///     7
/// }
/// # let _ = check_page(true);
/// ```
pub struct Fatal<'s> {
    inner: Logger<'s>,
}

impl Fatal<'static> {
    /// Creates a fatal accumulator that emits to the process-wide sink.
    #[must_use = "dropping the accumulator aborts the process"]
    pub fn new() -> Self {
        Self::with_sink(global_sink())
    }
}

impl<'s> Fatal<'s> {
    /// Creates a fatal accumulator that emits to `sink`.
    #[must_use = "dropping the accumulator aborts the process"]
    pub fn with_sink(sink: &'s dyn Sink) -> Self {
        Self {
            inner: Logger::with_sink(Severity::Fatal, sink),
        }
    }

    /// Appends the [`Display`](fmt::Display) rendering of `value`.
    pub fn append<T>(&mut self, value: T) -> &mut Self
    where
        T: fmt::Display,
    {
        self.inner.append(value);
        self
    }

    /// Appends `bytes` verbatim.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.inner.append_bytes(bytes);
        self
    }

    /// Emits the message and aborts the process.
    pub fn abort(&mut self) -> ! {
        self.inner.emit();
        terminate()
    }
}

impl fmt::Write for Fatal<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut self.inner, s)
    }
}

impl io::Write for Fatal<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.inner, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for Fatal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fatal").field(&self.inner).finish()
    }
}
