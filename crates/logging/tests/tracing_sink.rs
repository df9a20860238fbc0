//! Integration tests routing accumulators through the tracing-backed sink.

use std::io;
use std::sync::{Arc, Mutex};

use logging::Logger;
use logging_sink::{Severity, TracingSink};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn composed_messages_arrive_as_single_events() {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let sink = TracingSink::new();
        Logger::with_sink(Severity::Warning, &sink)
            .append("doublewrite buffer ")
            .append("not found");
        Logger::with_sink(Severity::Info, &sink).append("ready");
    });

    let output = String::from_utf8(buffer.0.lock().expect("buffer lock").clone()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("doublewrite buffer not found"));
    assert!(lines[1].contains("INFO"));
    assert!(lines[1].contains("ready"));
}
