//! crates/logging-sink/src/sink/mod.rs
//! The [`Sink`] trait and the sinks shipped with the crate.

mod memory;
#[cfg(feature = "tracing")]
mod tracing;
mod writer;

use std::sync::Arc;

use crate::record::Record;

pub use memory::MemorySink;
#[cfg(feature = "tracing")]
pub use self::tracing::{TRACING_TARGET, TracingSink};
pub use writer::{DEFAULT_PREFIX, WriterSink};

/// Receiver of finished diagnostics.
///
/// Accumulators call [`emit`](Self::emit) exactly once per composed message,
/// synchronously, before any fatal termination. Implementations must make a
/// single call appear atomic to outside observers when several threads emit
/// concurrently; they must not panic and have no way to report failure.
pub trait Sink: Send + Sync {
    /// Accepts one finished record.
    fn emit(&self, record: &Record<'_>);
}

impl<S> Sink for &S
where
    S: Sink + ?Sized,
{
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn forwarding_impls_reach_the_inner_sink() {
        let memory = Arc::new(MemorySink::new());

        let shared: Arc<MemorySink> = Arc::clone(&memory);
        shared.emit(&Record::new(Severity::Info, b"arc"));

        let boxed: Box<dyn Sink> = Box::new(Arc::clone(&memory));
        boxed.emit(&Record::new(Severity::Warning, b"box"));

        let borrowed: &dyn Sink = memory.as_ref();
        (&borrowed).emit(&Record::new(Severity::Error, b"ref"));

        let texts: Vec<String> = memory
            .records()
            .iter()
            .map(|record| record.text().into_owned())
            .collect();
        assert_eq!(texts, ["arc", "box", "ref"]);
    }
}
