//! Core logger types and traits

pub mod call_info;
pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod sink;
pub mod timestamp;
pub mod trigger;

pub use call_info::CallInfo;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use severity::{level_to_str, str_to_level, Severity, Threshold};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use trigger::{Trigger, TriggerCallback};
