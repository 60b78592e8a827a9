//! # Leveled Logger
//!
//! A leveled logger with severity-triggered callbacks.
//!
//! ## Features
//!
//! - **Six severities**: Debug, Info, Notice, Warn, Error, Critical
//! - **Caller provenance**: every line names the calling module, function and line
//! - **Triggers**: run a callback when a message reaches a configured severity,
//!   whether or not the message was printed
//! - **Fail-safe configuration**: unknown level names silence instead of erroring
//!
//! Each emitted line has the form
//! `2025/01/08 10:30:45 [Warn] server accept(:42) > message`.

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::{AsyncSink, FileSink, MemorySink, WriterSink};
    pub use crate::core::{
        CallInfo, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, Severity, Sink, Threshold, TimestampFormat, Trigger, TriggerCallback,
    };
}

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::{AsyncSink, FileSink, MemorySink, WriterSink};
pub use crate::core::{
    level_to_str, str_to_level, CallInfo, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, Severity, Sink, Threshold, TimestampFormat, Trigger,
    TriggerCallback,
};
