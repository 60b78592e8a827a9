//! File sink implementation

use crate::core::{LogRecord, LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file, creating it if missing.
///
/// Each line is flushed as soon as it is complete, so the file grows line
/// by line even if the process dies without dropping the logger.
pub struct FileSink {
    writer: LineWriter<File>,
    path: PathBuf,
    locked: bool,
}

impl FileSink {
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkOpen`] when the file cannot be opened for
    /// appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = Self::open_append(&path)?;

        Ok(Self {
            writer: LineWriter::new(file),
            path,
            locked: false,
        })
    }

    /// Open and take an exclusive advisory lock, held until the sink drops.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use leveled_logger::sinks::FileSink;
    ///
    /// let sink = FileSink::open_locked("/var/log/app.log").unwrap();
    /// assert!(sink.is_locked());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::FileLock`] if another process holds the lock.
    #[cfg(feature = "file")]
    pub fn open_locked(path: impl AsRef<Path>) -> Result<Self> {
        use fs2::FileExt;

        let path = path.as_ref().to_path_buf();
        let file = Self::open_append(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;

        Ok(Self {
            writer: LineWriter::new(file),
            path,
            locked: true,
        })
    }

    fn open_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Sink for FileSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut output = record.line();
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
        self.release_lock();
    }
}

impl FileSink {
    #[cfg(feature = "file")]
    fn release_lock(&mut self) {
        use fs2::FileExt;
        if self.locked {
            let _ = self.writer.get_ref().unlock();
            self.locked = false;
        }
    }

    #[cfg(not(feature = "file"))]
    fn release_lock(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Severity, TimestampFormat};
    use tempfile::TempDir;

    fn record(message: &str) -> LogRecord {
        LogRecord::new(Severity::Error, message, crate::call_info!(), &TimestampFormat::Standard)
    }

    #[test]
    fn test_appends_across_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.append(&record("first")).unwrap();
        }
        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.append(&record("second")).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("> first"));
        assert!(lines[1].ends_with("> second"));
    }

    #[test]
    fn test_line_is_visible_before_drop() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("live.log");

        let mut sink = FileSink::open(&path).unwrap();
        sink.append(&record("now")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("> now\n"));
    }

    #[test]
    fn test_open_failure_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::open(&path).err().expect("open should fail");
        assert!(matches!(err, LoggerError::SinkOpen { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_locked_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("locked.log");

        let sink = FileSink::open_locked(&path).unwrap();
        assert!(sink.is_locked());
        assert_eq!(sink.path(), path.as_path());

        drop(sink);
        let again = FileSink::open_locked(&path).unwrap();
        assert!(again.is_locked());
    }
}
