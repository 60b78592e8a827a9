//! Logging macros with call-site provenance.
//!
//! Each macro records the calling module, function and line, and accepts
//! either a format string with arguments (like `format!`) or, after a `;`,
//! a list of `Display` values concatenated with no separator.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warn};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_sink(sink.clone());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger; "retry ", 3, "/", 5);
//!
//! let lines = sink.lines();
//! assert!(lines[0].ends_with("> Server listening on port 8080"));
//! assert!(lines[1].ends_with("> retry 3/5"));
//! ```

/// Concatenate `Display` values with no separator.
#[doc(hidden)]
#[macro_export]
macro_rules! __concat_display {
    ($($value:expr),+) => {{
        let mut joined = ::std::string::String::new();
        $(
            {
                use ::std::fmt::Write as _;
                let _ = ::std::write!(joined, "{}", $value);
            }
        )+
        joined
    }};
}

/// Log at an explicit severity.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use leveled_logger::log;
/// log!(logger, Severity::Notice, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// log!(logger, Severity::Info; "joined", "-", "values");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr; $($value:expr),+ $(,)?) => {
        $logger.log(
            $severity,
            $crate::call_info!(),
            ::std::format_args!("{}", $crate::__concat_display!($($value),+)),
        )
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, $crate::call_info!(), ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Info; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Notice; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use leveled_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warn; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use leveled_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Severity::Critical; $($value),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
