//! In-memory sink

use crate::core::{LogRecord, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps formatted lines in memory. Clones share the same buffer, so one
/// handle can be given to a logger and another kept for inspection.
///
/// # Example
///
/// ```
/// use leveled_logger::info;
/// use leveled_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink(sink.clone());
/// info!(logger, "stored");
///
/// assert!(sink.lines()[0].ends_with("> stored"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.lines.lock().push(record.line());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
