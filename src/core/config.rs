//! Serializable logger configuration
//!
//! Only the data half of a logger can live in a config file; trigger
//! callbacks are attached to the returned builder in code.

use super::error::{LoggerError, Result};
use super::logger::LoggerBuilder;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
///
/// let config = LoggerConfig::from_json(r#"{ "level": "warn", "trigger_level": "critical" }"#).unwrap();
/// let logger = config
///     .into_builder()
///     .unwrap()
///     .sink(MemorySink::new())
///     .trigger_callback(|| eprintln!("Critical happened."))
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.threshold(), Threshold::At(Severity::Warn));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Filter threshold name; absent means debug
    pub level: Option<String>,

    /// Threshold for the trigger callback attached in code
    pub trigger_level: Option<String>,

    /// Append to this file instead of stdout
    pub file: Option<PathBuf>,

    /// Hold an exclusive advisory lock on `file`
    pub lock_file: bool,

    /// Queue size for background writes; absent means synchronous
    pub async_buffer: Option<usize>,

    pub timestamp_format: TimestampFormat,

    /// Reject unknown severity names instead of silencing the logger
    pub strict: bool,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(
                "LoggerConfig",
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and turn into a builder.
    ///
    /// # Errors
    ///
    /// In strict mode, unknown severity names are rejected. An invalid
    /// custom timestamp layout, a zero `async_buffer` or `lock_file` without
    /// `file` is always rejected.
    pub fn into_builder(self) -> Result<LoggerBuilder> {
        if self.strict {
            let names = [self.level.as_deref(), self.trigger_level.as_deref()];
            for name in names.into_iter().flatten() {
                name.parse::<Severity>()?;
            }
        }

        self.timestamp_format.validate()?;
        if self.async_buffer == Some(0) {
            return Err(LoggerError::config("LoggerConfig", "async_buffer must be at least 1"));
        }
        if self.lock_file && self.file.is_none() {
            return Err(LoggerError::config("LoggerConfig", "lock_file requires file"));
        }

        let mut builder = LoggerBuilder::new().timestamp_format(self.timestamp_format);
        if let Some(name) = self.level {
            builder = builder.level(name);
        }
        if let Some(name) = self.trigger_level {
            builder = builder.trigger_level(name);
        }
        if let Some(path) = self.file {
            builder = if self.lock_file {
                lock_file(builder, path)?
            } else {
                builder.file(path)
            };
        }
        if let Some(size) = self.async_buffer {
            builder = builder.async_mode(size);
        }

        Ok(builder)
    }
}

#[cfg(feature = "file")]
fn lock_file(builder: LoggerBuilder, path: PathBuf) -> Result<LoggerBuilder> {
    Ok(builder.locked_file(path))
}

#[cfg(not(feature = "file"))]
fn lock_file(_builder: LoggerBuilder, _path: PathBuf) -> Result<LoggerBuilder> {
    Err(LoggerError::config(
        "LoggerConfig",
        "lock_file needs the `file` feature",
    ))
}
