#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` composes kernel diagnostics the way a text stream is written and
//! emits each finished message exactly once, at a fixed severity, when the
//! composing value goes out of scope. Fatal diagnostics abort the process
//! after emission.
//!
//! # Design
//!
//! [`Logger`] owns a byte buffer, a [`Severity`] chosen at construction and
//! a borrowed [`Sink`](logging_sink::Sink). Appends only touch the buffer;
//! the `Drop` implementation hands the buffer to the sink as one
//! [`Record`](logging_sink::Record). Because emission lives in `Drop`, it
//! also happens on early returns and during panic unwinding.
//!
//! Severity variants are a closed enum rather than separate types. The
//! constructors [`info`], [`warn`], [`error`], [`error_or_warn`] and
//! [`fatal_or_error`] only differ in the severity they store. [`fatal`]
//! returns the distinct [`Fatal`] type whose [`Fatal::abort`] is typed `!`.
//!
//! # Invariants
//!
//! - One accumulator produces exactly one record, including for empty
//!   messages.
//! - The severity never changes after construction; conditional constructors
//!   resolve their predicate once.
//! - A fatal record is handed to the sink before the process is aborted, and
//!   control never returns to the caller afterwards.
//! - Accumulators are `!Send`; each stays on the thread that created it.
//!
//! # Examples
//!
//! ```
//! use logging::{Hex, Logger};
//! use logging_sink::{MemorySink, Severity};
//!
//! let sink = MemorySink::new();
//! Logger::with_sink(Severity::error_or_warning(false), &sink)
//!     .append("space id ")
//!     .append(Hex(0x1f))
//!     .append(" has ")
//!     .append(31)
//!     .append(" pages");
//!
//! let record = &sink.take()[0];
//! assert_eq!(record.severity, Severity::Warning);
//! assert_eq!(record.text(), "space id 0x1f has 31 pages");
//! ```
//!
//! # See also
//!
//! - `logging-sink` for sinks and process-wide sink installation.

mod dump;
mod fatal;
mod hex;
mod logger;
mod macros;
mod variants;

pub use dump::{BufSummary, BufText, DEFAULT_DUMP_WIDTH, Dump, HexBytes, MAX_DUMP_WIDTH, NON_PRINTABLE, write_dump};
pub use fatal::{Fatal, terminate};
pub use hex::Hex;
pub use logger::Logger;
pub use logging_sink::Severity;
pub use variants::{error, error_or_warn, fatal, fatal_or_error, info, warn};
