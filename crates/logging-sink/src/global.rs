//! crates/logging-sink/src/global.rs
//! Process-wide sink registration.

use std::io;
use std::sync::OnceLock;

use crate::sink::{Sink, WriterSink};

static GLOBAL_SINK: OnceLock<Box<dyn Sink>> = OnceLock::new();

/// Installs `sink` as the process-wide sink.
///
/// The sink can be set once. The first call to [`global_sink`] also fixes the
/// sink (falling back to standard error), so installation must happen before
/// any diagnostic is emitted.
pub fn set_global_sink(sink: Box<dyn Sink>) -> Result<(), SetSinkError> {
    GLOBAL_SINK
        .set(sink)
        .map_err(|_| SetSinkError { _private: () })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "ib::sink", "installed global diagnostic sink");

    Ok(())
}

/// Returns the process-wide sink.
///
/// If no sink was installed, a [`WriterSink`] over standard error with the
/// default prefix is created and kept for the rest of the process.
pub fn global_sink() -> &'static dyn Sink {
    GLOBAL_SINK
        .get_or_init(|| Box::new(WriterSink::new(io::stderr())))
        .as_ref()
}

/// Error returned by [`set_global_sink`] when a sink is already in place.
#[derive(Debug, thiserror::Error)]
#[error("a global diagnostic sink has already been set")]
pub struct SetSinkError {
    _private: (),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySink, Record, Severity};
    use std::sync::Arc;

    #[test]
    fn global_sink_is_set_once() {
        let memory = Arc::new(MemorySink::new());
        let first = set_global_sink(Box::new(Arc::clone(&memory)));
        let second = set_global_sink(Box::new(MemorySink::new()));

        let err = second.expect_err("second installation must fail");
        assert_eq!(
            err.to_string(),
            "a global diagnostic sink has already been set"
        );

        if first.is_ok() {
            global_sink().emit(&Record::new(Severity::Info, b"routed"));
            let records = memory.take();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].text(), "routed");
        }
    }
}
