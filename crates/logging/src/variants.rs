//! crates/logging/src/variants.rs
//! Severity-specific constructors targeting the process-wide sink.

use logging_sink::Severity;

use crate::fatal::Fatal;
use crate::logger::Logger;

/// Starts an informational message.
///
/// ```
/// logging::info().append("buffer pool initialised: ").append(128).append(" MiB");
/// ```
#[must_use = "the message is emitted when the logger is dropped"]
pub fn info() -> Logger<'static> {
    Logger::new(Severity::Info)
}

/// Starts a warning.
#[must_use = "the message is emitted when the logger is dropped"]
pub fn warn() -> Logger<'static> {
    Logger::new(Severity::Warning)
}

/// Starts an error message.
#[must_use = "the message is emitted when the logger is dropped"]
pub fn error() -> Logger<'static> {
    Logger::new(Severity::Error)
}

/// Starts a fatal message; see [`Fatal`].
#[must_use = "dropping the accumulator aborts the process"]
pub fn fatal() -> Fatal<'static> {
    Fatal::new()
}

/// Starts an error message if `pred` holds, otherwise a warning.
///
/// The severity is resolved here and stays fixed for the logger's lifetime.
#[must_use = "the message is emitted when the logger is dropped"]
pub fn error_or_warn(pred: bool) -> Logger<'static> {
    Logger::new(Severity::error_or_warning(pred))
}

/// Starts a fatal message if `pred` holds, otherwise an error message.
///
/// When resolved to fatal, dropping the logger aborts the process after the
/// record is emitted.
#[must_use = "the message is emitted when the logger is dropped"]
pub fn fatal_or_error(pred: bool) -> Logger<'static> {
    Logger::new(Severity::fatal_or_error(pred))
}
