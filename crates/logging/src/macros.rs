//! crates/logging/src/macros.rs
//! Format-string front ends for the severity constructors.
//!
//! Each macro composes its arguments into a fresh accumulator that is emitted
//! at the end of the macro's statement.

/// Emits an informational message.
///
/// # Example
/// ```
/// logging::ib_info!("recovered {} pages", 12);
/// ```
#[macro_export]
macro_rules! ib_info {
    ($($arg:tt)*) => {{
        $crate::info().append(::std::format_args!($($arg)*));
    }};
}

/// Emits a warning.
///
/// # Example
/// ```
/// logging::ib_warn!("long semaphore wait: {} s", 240);
/// ```
#[macro_export]
macro_rules! ib_warn {
    ($($arg:tt)*) => {{
        $crate::warn().append(::std::format_args!($($arg)*));
    }};
}

/// Emits an error message.
///
/// # Example
/// ```
/// logging::ib_error!("cannot open tablespace {}", "ibdata1");
/// ```
#[macro_export]
macro_rules! ib_error {
    ($($arg:tt)*) => {{
        $crate::error().append(::std::format_args!($($arg)*));
    }};
}

/// Emits an error message if the predicate holds, otherwise a warning.
///
/// # Example
/// ```
/// let strict = false;
/// logging::ib_error_or_warn!(strict, "ignoring unknown option {}", "foo");
/// ```
#[macro_export]
macro_rules! ib_error_or_warn {
    ($pred:expr, $($arg:tt)*) => {{
        $crate::error_or_warn($pred).append(::std::format_args!($($arg)*));
    }};
}

/// Emits a fatal message and aborts if the predicate holds, otherwise emits an
/// error message.
///
/// # Example
/// ```
/// let unrecoverable = false;
/// logging::ib_fatal_or_error!(unrecoverable, "log file {} is damaged", 3);
/// ```
#[macro_export]
macro_rules! ib_fatal_or_error {
    ($pred:expr, $($arg:tt)*) => {{
        $crate::fatal_or_error($pred).append(::std::format_args!($($arg)*));
    }};
}

/// Emits a fatal message and aborts the process.
///
/// The macro evaluates to `!`, so it can stand in any expression position.
///
/// # Example
/// ```no_run
/// fn page_type(raw: u16) -> &'static str {
///     match raw {
///         2 => "undo log",
///         17855 => "index",
///         other => logging::ib_fatal!("unknown page type {}", other),
///     }
/// }
/// # let _ = page_type(2);
/// ```
#[macro_export]
macro_rules! ib_fatal {
    ($($arg:tt)*) => {
        $crate::fatal().append(::std::format_args!($($arg)*)).abort()
    };
}
