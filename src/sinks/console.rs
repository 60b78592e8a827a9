//! Console sink implementation

use crate::core::{LogRecord, Result, Severity, Sink};
use colored::Colorize;
use std::io::Write;

/// Console destination for [`ConsoleSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    /// Error and Critical go to stderr, everything else to stdout
    Split,
}

pub struct ConsoleSink {
    use_colors: bool,
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            target: ConsoleTarget::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            target: ConsoleTarget::default(),
        }
    }

    /// # Example
    ///
    /// ```
    /// use leveled_logger::sinks::{ConsoleSink, ConsoleTarget};
    ///
    /// let sink = ConsoleSink::new().with_target(ConsoleTarget::Split);
    /// ```
    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    fn to_stderr(&self, severity: Severity) -> bool {
        match self.target {
            ConsoleTarget::Stdout => false,
            ConsoleTarget::Stderr => true,
            ConsoleTarget::Split => severity >= Severity::Error,
        }
    }

    fn format_text(&self, record: &LogRecord) -> String {
        if !self.use_colors {
            return record.line();
        }

        let tag = record
            .severity
            .to_str()
            .color(record.severity.color_code())
            .to_string();
        format!("{} {}", record.prefix_with_tag(&tag), record.message)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.format_text(record);
        if self.to_stderr(record.severity) {
            writeln!(std::io::stderr().lock(), "{}", output)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", output)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimestampFormat;

    fn record(severity: Severity) -> LogRecord {
        LogRecord::new(severity, "hello", crate::call_info!(), &TimestampFormat::Standard)
    }

    #[test]
    fn test_plain_text_matches_line() {
        let sink = ConsoleSink::with_colors(false);
        let record = record(Severity::Warn);
        assert_eq!(sink.format_text(&record), record.line());
    }

    #[test]
    fn test_colored_text_keeps_layout() {
        colored::control::set_override(true);
        let sink = ConsoleSink::with_colors(true);
        let text = sink.format_text(&record(Severity::Critical));
        colored::control::unset_override();

        assert!(text.contains("Critical"));
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with("> hello"));
    }

    #[test]
    fn test_split_target() {
        let sink = ConsoleSink::new().with_target(ConsoleTarget::Split);
        assert!(!sink.to_stderr(Severity::Warn));
        assert!(sink.to_stderr(Severity::Error));
        assert!(sink.to_stderr(Severity::Critical));

        let sink = ConsoleSink::new();
        assert!(!sink.to_stderr(Severity::Critical));
    }

    #[test]
    fn test_append_does_not_fail() {
        let mut sink = ConsoleSink::with_colors(false);
        sink.append(&record(Severity::Info)).unwrap();
        sink.flush().unwrap();
    }
}
