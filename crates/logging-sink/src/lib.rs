#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the receiving end of the diagnostic logging
//! facility: the [`Severity`] tag attached to every message, the [`Record`]
//! handed over when a message is finished, and the [`Sink`] trait implemented
//! by everything that can accept such records.
//!
//! # Design
//!
//! A sink receives exactly one [`Record`] per composed message. Records are
//! complete and self-contained, so a sink only has to make each individual
//! [`Sink::emit`] call appear atomic. [`WriterSink`] does so by holding a
//! mutex around its writer for the duration of a record.
//!
//! The process-wide sink is installed once with [`set_global_sink`] and
//! resolved with [`global_sink`]. When nothing was installed, a
//! [`WriterSink`] over standard error is built on first use.
//!
//! # Invariants
//!
//! - [`Sink::emit`] never reports failure to its caller; write errors stay
//!   inside the sink.
//! - A record's severity is fixed before the record is built and is never
//!   altered by a sink.
//! - `LineMode::WithNewline` terminates every rendered record with `\n`.
//!
//! # Examples
//!
//! Render two records into an in-memory buffer:
//!
//! ```
//! use logging_sink::{LineMode, Record, Severity, Sink, WriterSink};
//!
//! let sink = WriterSink::new(Vec::new());
//! sink.emit(&Record::new(Severity::Info, b"buffer pool ready"));
//! sink.emit(&Record::new(Severity::Warning, b"slow flush"));
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "[Note] InnoDB: buffer pool ready\n[Warning] InnoDB: slow flush\n"
//! );
//! # let _ = LineMode::WithNewline;
//! ```
//!
//! # See also
//!
//! - `logging` crate for the accumulator that composes records and for the
//!   `ib_info!`/`ib_fatal!` macro family.

mod config;
mod global;
mod line_mode;
mod record;
mod severity;
mod sink;

pub use config::{ConfigError, SinkConfig, Target};
pub use global::{SetSinkError, global_sink, set_global_sink};
pub use line_mode::LineMode;
pub use record::{CapturedRecord, Record};
pub use severity::{ParseSeverityError, Severity};
#[cfg(feature = "tracing")]
pub use sink::{TRACING_TARGET, TracingSink};
pub use sink::{DEFAULT_PREFIX, MemorySink, Sink, WriterSink};
