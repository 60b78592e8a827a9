//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A severity name outside debug/info/notice/warn/error/critical
    #[error("Unknown severity: '{0}'")]
    UnknownSeverity(String),

    /// The file sink could not be opened
    #[error("Failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLock { path: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide logger was already installed
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    pub fn unknown_severity(name: impl Into<String>) -> Self {
        LoggerError::UnknownSeverity(name.into())
    }

    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLock { path: path.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_severity("bogus");
        assert!(matches!(err, LoggerError::UnknownSeverity(ref name) if name == "bogus"));

        let err = LoggerError::config("LoggerConfig", "empty path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_lock("/var/log/app.log");
        assert!(matches!(err, LoggerError::FileLock { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_severity("verbose");
        assert_eq!(err.to_string(), "Unknown severity: 'verbose'");

        let err = LoggerError::config("LoggerConfig", "empty path");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: empty path"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_sink_open_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::sink_open("/root/app.log", io_err);

        assert!(err.to_string().contains("/root/app.log"));
        assert!(err.to_string().contains("access denied"));
        assert!(err.source().is_some());
    }
}
