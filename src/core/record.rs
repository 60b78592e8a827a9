//! A single formatted log message

use super::call_info::CallInfo;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    /// Already rendered with the logger's [`TimestampFormat`].
    pub timestamp: String,
    pub call_info: CallInfo,
}

impl LogRecord {
    /// Escape line breaks and tabs so a single emission stays on one line
    /// and cannot forge extra entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Stamp `message` with the current time. The stored message has
    /// `\n`, `\r` and `\t` escaped.
    pub fn new(severity: Severity, message: &str, call_info: CallInfo, format: &TimestampFormat) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(message),
            timestamp: format.now(),
            call_info,
        }
    }

    /// `<timestamp> [<Level>] <Package> <Function>(:<Line>) >`
    pub fn prefix(&self) -> String {
        self.prefix_with_tag(self.severity.to_str())
    }

    /// Same as [`prefix`](Self::prefix) with a caller-supplied level tag,
    /// e.g. a colorized one.
    pub fn prefix_with_tag(&self, tag: &str) -> String {
        format!(
            "{} [{}] {} {}(:{}) >",
            self.timestamp, tag, self.call_info.pkg_name, self.call_info.func_name, self.call_info.line
        )
    }

    /// The full line, without trailing newline.
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix(), self.message)
    }
}
