//! crates/logging-sink/src/record.rs
//! The unit handed to a sink when a composed message is finished.

use std::borrow::Cow;

use crate::severity::Severity;

/// A finished diagnostic: the severity fixed at construction plus the
/// accumulated message bytes.
///
/// Message bytes are opaque. Callers may append raw byte ranges, so the
/// payload is not guaranteed to be UTF-8; [`text`](Self::text) provides a
/// lossy view for sinks that need a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    severity: Severity,
    message: &'a [u8],
}

impl<'a> Record<'a> {
    /// Creates a record borrowing `message`.
    #[must_use]
    pub const fn new(severity: Severity, message: &'a [u8]) -> Self {
        Self { severity, message }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the raw message bytes.
    #[must_use]
    pub const fn message(&self) -> &'a [u8] {
        self.message
    }

    /// Returns the message as text, replacing invalid UTF-8 sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::{Record, Severity};
    ///
    /// let record = Record::new(Severity::Error, b"page \xff corrupt");
    /// assert_eq!(record.text(), "page \u{fffd} corrupt");
    /// ```
    #[must_use]
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.message)
    }

    /// Copies the record into an owned [`CapturedRecord`].
    #[must_use]
    pub fn to_captured(&self) -> CapturedRecord {
        CapturedRecord {
            severity: self.severity,
            message: self.message.to_vec(),
        }
    }
}

/// Owned copy of a [`Record`], as stored by [`MemorySink`](crate::MemorySink).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedRecord {
    /// Severity the record was emitted with.
    pub severity: Severity,
    /// Raw message bytes.
    pub message: Vec<u8>,
}

impl CapturedRecord {
    /// Borrows the captured data as a [`Record`].
    #[must_use]
    pub fn as_record(&self) -> Record<'_> {
        Record::new(self.severity, &self.message)
    }

    /// Returns the message as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.message)
    }
}
