//! crates/logging-sink/src/sink/memory.rs
//! In-memory sink that keeps emitted records.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Sink;
use crate::record::{CapturedRecord, Record};

/// Sink that keeps every record in memory.
///
/// Intended for tests and for callers that inspect diagnostics in-process.
/// Wrap it in an [`Arc`](std::sync::Arc) to keep a handle after installing
/// it as the global sink.
///
/// # Examples
///
/// ```
/// use logging_sink::{MemorySink, Record, Severity, Sink};
///
/// let sink = MemorySink::new();
/// sink.emit(&Record::new(Severity::Warning, b"slow"));
///
/// let records = sink.take();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].severity, Severity::Warning);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the captured records in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Removes and returns the captured records.
    #[must_use]
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: &Record<'_>) {
        self.lock().push(record.to_captured());
    }
}
