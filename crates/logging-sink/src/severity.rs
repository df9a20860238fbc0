//! crates/logging-sink/src/severity.rs
//! Severity tags attached to composed diagnostics.

use std::fmt;
use std::str::FromStr;

/// Severity of a composed diagnostic message.
///
/// The tag is chosen when the accumulator is created and never changes
/// afterwards. [`Severity::Fatal`] additionally obliges the accumulator to
/// terminate the process once the sink has accepted the record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Observational note.
    Info,
    /// Degraded but continuable condition.
    Warning,
    /// Localized failure the caller recovers from or reports upward.
    Error,
    /// Unrecoverable condition; emission is followed by process termination.
    Fatal,
}

impl Severity {
    /// Resolves to [`Severity::Error`] when `pred` holds, otherwise
    /// [`Severity::Warning`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::error_or_warning(true), Severity::Error);
    /// assert_eq!(Severity::error_or_warning(false), Severity::Warning);
    /// ```
    #[must_use]
    pub const fn error_or_warning(pred: bool) -> Self {
        if pred { Self::Error } else { Self::Warning }
    }

    /// Resolves to [`Severity::Fatal`] when `pred` holds, otherwise
    /// [`Severity::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::fatal_or_error(true), Severity::Fatal);
    /// assert_eq!(Severity::fatal_or_error(false), Severity::Error);
    /// ```
    #[must_use]
    pub const fn fatal_or_error(pred: bool) -> Self {
        if pred { Self::Fatal } else { Self::Error }
    }

    /// Returns the lowercase label of the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "info");
    /// assert_eq!(Severity::Fatal.as_str(), "fatal");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Returns the bracketed server-log label used by [`WriterSink`](crate::WriterSink).
    ///
    /// Fatal records are logged at error level; the fatal marker is rendered
    /// separately by the sink.
    #[must_use]
    pub const fn log_label(self) -> &'static str {
        match self {
            Self::Info => "[Note]",
            Self::Warning => "[Warning]",
            Self::Error | Self::Fatal => "[ERROR]",
        }
    }

    /// Reports whether emitting at this severity terminates the process.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised diagnostic severity '{input}'")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "info" | "note" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}
