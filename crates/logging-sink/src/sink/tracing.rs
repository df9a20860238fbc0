//! crates/logging-sink/src/sink/tracing.rs
//! Bridge from emitted records to the tracing crate.
//!
//! [`TracingSink`] lets a process that already runs a `tracing` subscriber
//! receive kernel diagnostics through it instead of a dedicated writer.
//! Severities map onto tracing levels as follows:
//!
//! | Severity  | Level   |
//! |-----------|---------|
//! | `Info`    | `INFO`  |
//! | `Warning` | `WARN`  |
//! | `Error`   | `ERROR` |
//! | `Fatal`   | `ERROR` with `fatal = true` |

use super::Sink;
use crate::record::Record;
use crate::severity::Severity;

/// Target used for every event produced by [`TracingSink`].
pub const TRACING_TARGET: &str = "ib::diagnostics";

/// Sink that forwards records as `tracing` events under [`TRACING_TARGET`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, record: &Record<'_>) {
        let message = record.text();
        // tracing requires a constant level per callsite.
        match record.severity() {
            Severity::Info => ::tracing::info!(target: TRACING_TARGET, "{message}"),
            Severity::Warning => ::tracing::warn!(target: TRACING_TARGET, "{message}"),
            Severity::Error => ::tracing::error!(target: TRACING_TARGET, "{message}"),
            Severity::Fatal => {
                ::tracing::error!(target: TRACING_TARGET, fatal = true, "{message}");
            }
        }
    }
}
