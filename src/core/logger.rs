//! Main logger implementation

use super::{
    call_info::CallInfo,
    error::{LoggerError, Result},
    metrics::LoggerMetrics,
    record::LogRecord,
    severity::{str_to_level, Severity, Threshold},
    sink::Sink,
    timestamp::TimestampFormat,
    trigger::{Trigger, TriggerCallback},
};
use crate::sinks::{FileSink, WriterSink};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// A leveled logger bound to a single sink.
///
/// Every emission is checked twice and independently: against the filter
/// threshold (write the line or not) and against the trigger threshold (run
/// the registered callback or not). A message can trigger without printing.
///
/// Messages are emitted through the [`log!`](crate::log) family of macros,
/// which capture the calling module, function and line. Line breaks and tabs
/// inside a message are written escaped (`\n`, `\r`, `\t`), so one
/// emission is always exactly one line of output.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
/// use leveled_logger::{critical, notice, warn};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink(sink.clone());
/// logger.set_level("warn").set_trigger("critical", || eprintln!("Critical happened."));
///
/// notice!(logger, "Notice");
/// warn!(logger, "warn");
/// critical!(logger, "critical");
///
/// assert_eq!(sink.lines().len(), 2);
/// ```
pub struct Logger {
    sink: Mutex<Box<dyn Sink>>,
    threshold: RwLock<Threshold>,
    trigger: RwLock<Option<Trigger>>,
    timestamp_format: TimestampFormat,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Bind any byte stream (stdout, a file, a `Vec<u8>`, ...).
    #[must_use]
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_sink(WriterSink::new(writer))
    }

    #[must_use]
    pub fn with_sink<S: Sink + 'static>(sink: S) -> Self {
        Self::with_boxed_sink(Box::new(sink))
    }

    #[must_use]
    pub fn with_boxed_sink(sink: Box<dyn Sink>) -> Self {
        Self {
            sink: Mutex::new(sink),
            threshold: RwLock::new(Threshold::default()),
            trigger: RwLock::new(None),
            timestamp_format: TimestampFormat::default(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Append to `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] if the file cannot be opened.
    pub fn with_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_sink(FileSink::open(path)?))
    }

    #[must_use]
    pub(crate) fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set the filter threshold by name, case-insensitively.
    ///
    /// Unknown names disable output entirely instead of failing; use
    /// [`try_set_level`](Self::try_set_level) to reject them.
    pub fn set_level(&self, name: &str) -> &Self {
        let threshold = self.lenient_threshold(name);
        self.set_threshold(threshold);
        self
    }

    /// Strict variant of [`set_level`](Self::set_level).
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownSeverity`] and leaves the threshold
    /// unchanged if `name` is not a known severity.
    pub fn try_set_level(&self, name: &str) -> Result<()> {
        let severity: Severity = name.parse()?;
        self.set_threshold(severity);
        Ok(())
    }

    pub fn set_threshold(&self, threshold: impl Into<Threshold>) {
        *self.threshold.write() = threshold.into();
    }

    pub fn threshold(&self) -> Threshold {
        *self.threshold.read()
    }

    /// Register `callback` to run whenever a message at or above `name` is
    /// emitted, replacing any previous registration.
    pub fn set_trigger<F>(&self, name: &str, callback: F) -> &Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let threshold = self.lenient_threshold(name);
        self.register_trigger(Trigger::new(threshold, callback));
        self
    }

    /// Strict variant of [`set_trigger`](Self::set_trigger).
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownSeverity`] and keeps the current
    /// registration if `name` is not a known severity.
    pub fn try_set_trigger<F>(&self, name: &str, callback: F) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let severity: Severity = name.parse()?;
        self.register_trigger(Trigger::new(severity, callback));
        Ok(())
    }

    pub fn set_trigger_callback(&self, threshold: Threshold, callback: TriggerCallback) {
        self.register_trigger(Trigger::from_callback(threshold, callback));
    }

    pub fn register_trigger(&self, trigger: Trigger) {
        *self.trigger.write() = Some(trigger);
    }

    /// Remove the trigger registration, returning it.
    pub fn clear_trigger(&self) -> Option<Trigger> {
        self.trigger.write().take()
    }

    pub fn trigger_threshold(&self) -> Option<Threshold> {
        self.trigger.read().as_ref().map(Trigger::threshold)
    }

    fn lenient_threshold(&self, name: &str) -> Threshold {
        let threshold = str_to_level(name);
        if threshold == Threshold::Never {
            self.metrics.record_misconfiguration();
        }
        threshold
    }

    /// Emit `message` at `severity`, attributed to `call_info`.
    ///
    /// The macros and the per-severity methods all funnel through here.
    pub fn log(&self, severity: Severity, call_info: CallInfo, message: fmt::Arguments<'_>) {
        let threshold = self.threshold();
        if threshold.admits(severity) {
            let message = message.to_string();
            let record = LogRecord::new(severity, &message, call_info, &self.timestamp_format);
            self.write_record(&record);
        } else {
            self.metrics.record_suppressed();
        }

        // Clone out of the lock so the callback may reconfigure this logger.
        let action = self
            .trigger
            .read()
            .as_ref()
            .filter(|trigger| trigger.fires_for(severity))
            .map(Trigger::action);

        if let Some(action) = action {
            self.metrics.record_trigger();
            action();
        }
    }

    /// Write a record with panic isolation; failures never reach the caller.
    fn write_record(&self, record: &LogRecord) {
        let mut sink = self.sink.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.append(record)));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOGGER CRITICAL] Sink '{}' panicked: {}", sink.name(), panic_msg);
                self.metrics.record_write_failure();
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Counters for lines written, suppressed, triggers fired and failures.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("trigger", &self.trigger_threshold())
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level("notice")
///     .sink(MemorySink::new())
///     .trigger("error", || eprintln!("paging on-call"))
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.threshold(), Threshold::At(Severity::Notice));
/// ```
pub struct LoggerBuilder {
    level: Option<String>,
    threshold: Threshold,
    trigger_level: Option<String>,
    trigger_threshold: Option<Threshold>,
    trigger_callback: Option<TriggerCallback>,
    sink: Option<Box<dyn Sink>>,
    file: Option<(std::path::PathBuf, bool)>,
    async_buffer: Option<usize>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: None,
            threshold: Threshold::default(),
            trigger_level: None,
            trigger_threshold: None,
            trigger_callback: None,
            sink: None,
            file: None,
            async_buffer: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Filter threshold by name; unknown names silence the logger.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, name: impl Into<String>) -> Self {
        self.level = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.level = None;
        self.threshold = threshold.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trigger<F>(self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.trigger_level(name).trigger_callback(callback)
    }

    /// Trigger threshold by name; unknown names never fire.
    #[must_use = "builder methods return a new value"]
    pub fn trigger_level(mut self, name: impl Into<String>) -> Self {
        self.trigger_level = Some(name.into());
        self.trigger_threshold = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trigger_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.trigger_level = None;
        self.trigger_threshold = Some(threshold.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trigger_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.trigger_callback = Some(Arc::new(callback));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.sink(WriterSink::new(writer))
    }

    /// Append to a file; opened when [`build`](Self::build) runs.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.file = Some((path.into(), false));
        self
    }

    /// Like [`file`](Self::file), holding an exclusive advisory lock.
    #[cfg(feature = "file")]
    #[must_use = "builder methods return a new value"]
    pub fn locked_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.file = Some((path.into(), true));
        self
    }

    /// Move line writes onto a background thread with the given queue size.
    ///
    /// Triggers still run on the emitting thread.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, buffer_size: usize) -> Self {
        self.async_buffer = Some(buffer_size);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the Logger
    ///
    /// Without an explicit sink or file the logger writes to stdout.
    ///
    /// # Errors
    ///
    /// Fails if the configured file cannot be opened or locked, if both a
    /// sink and a file were configured, if a trigger callback has no
    /// threshold, or if a custom timestamp layout is invalid. A trigger threshold without a callback registers nothing.
    pub fn build(self) -> Result<Logger> {
        self.timestamp_format.validate()?;

        if self.trigger_callback.is_some()
            && self.trigger_level.is_none()
            && self.trigger_threshold.is_none()
        {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "trigger callback set without a trigger level",
            ));
        }

        let sink: Box<dyn Sink> = match (self.sink, self.file) {
            (Some(_), Some((path, _))) => {
                return Err(LoggerError::config(
                    "LoggerBuilder",
                    format!("both a sink and file '{}' were configured", path.display()),
                ));
            }
            (Some(sink), None) => sink,
            (None, Some((path, locked))) => Box::new(open_file_sink(&path, locked)?),
            (None, None) => Box::new(WriterSink::stdout()),
        };

        let sink: Box<dyn Sink> = match self.async_buffer {
            Some(size) => Box::new(crate::sinks::AsyncSink::new(sink, size)?),
            None => sink,
        };

        let logger = Logger::with_boxed_sink(sink).with_timestamp_format(self.timestamp_format);
        match self.level {
            Some(name) => {
                logger.set_level(&name);
            }
            None => logger.set_threshold(self.threshold),
        }
        if let Some(callback) = self.trigger_callback {
            let threshold = match self.trigger_level {
                Some(name) => logger.lenient_threshold(&name),
                None => self.trigger_threshold.unwrap_or_default(),
            };
            logger.set_trigger_callback(threshold, callback);
        }

        Ok(logger)
    }
}

#[cfg(feature = "file")]
fn open_file_sink(path: &Path, locked: bool) -> Result<FileSink> {
    if locked {
        FileSink::open_locked(path)
    } else {
        FileSink::open(path)
    }
}

#[cfg(not(feature = "file"))]
fn open_file_sink(path: &Path, _locked: bool) -> Result<FileSink> {
    FileSink::open(path)
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
