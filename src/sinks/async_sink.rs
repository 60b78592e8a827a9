//! Background-thread sink wrapper
//!
//! Moves line writes off the emitting thread. Records keep their order, and
//! a full queue blocks the emitter rather than dropping lines. Triggers are
//! unaffected: the logger still runs them inline.

use crate::core::{LogRecord, LoggerError, Result, Sink};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Default time to wait for pending lines when an [`AsyncSink`] drops
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const BATCH_SIZE: usize = 50;

enum Command {
    Record(LogRecord),
    Flush(Sender<Result<()>>),
}

pub struct AsyncSink {
    sender: Option<Sender<Command>>,
    handle: Option<thread::JoinHandle<()>>,
    name: String,
    capacity: usize,
}

impl AsyncSink {
    /// Spawn a worker that owns `inner`, with a queue of `buffer_size` records.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::prelude::*;
    /// use leveled_logger::info;
    /// use leveled_logger::sinks::AsyncSink;
    ///
    /// let lines = MemorySink::new();
    /// let logger = Logger::with_sink(AsyncSink::new(Box::new(lines.clone()), 64).unwrap());
    /// info!(logger, "queued");
    /// logger.flush().unwrap();
    ///
    /// assert_eq!(lines.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails for a zero `buffer_size` or if the worker thread cannot spawn.
    pub fn new(inner: Box<dyn Sink>, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(LoggerError::config(
                "AsyncSink",
                "buffer size must be at least 1",
            ));
        }

        let (sender, receiver) = bounded(buffer_size);
        let name = format!("async({})", inner.name());
        let handle = thread::Builder::new()
            .name("leveled-logger".to_string())
            .spawn(move || Self::run(inner, receiver))?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            name,
            capacity: buffer_size,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Worker loop: drain up to `BATCH_SIZE` commands at a time and flush
    /// the inner sink after each batch.
    fn run(mut inner: Box<dyn Sink>, receiver: Receiver<Command>) {
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        while let Ok(command) = receiver.recv() {
            batch.push(command);
            while batch.len() < BATCH_SIZE {
                match receiver.try_recv() {
                    Ok(command) => batch.push(command),
                    Err(_) => break,
                }
            }

            for command in batch.drain(..) {
                match command {
                    Command::Record(record) => {
                        if let Err(e) = inner.append(&record) {
                            eprintln!("[LOGGER ERROR] Sink '{}' failed (async): {}", inner.name(), e);
                        }
                    }
                    Command::Flush(ack) => {
                        let _ = ack.send(inner.flush());
                    }
                }
            }

            if let Err(e) = inner.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed (async): {}", inner.name(), e);
            }
        }

        let _ = inner.flush();
    }

    fn sender(&self) -> Result<&Sender<Command>> {
        self.sender
            .as_ref()
            .ok_or_else(|| LoggerError::writer("async sink is shut down"))
    }

    /// Stop the worker after it drains pending lines.
    ///
    /// Returns `true` if the worker finished within `timeout`.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Async worker thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Async worker thread did not finish within {:?} timeout. \
                     Some lines may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Sink for AsyncSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.sender()?
            .send(Command::Record(record.clone()))
            .map_err(|_| LoggerError::writer("async worker stopped"))
    }

    /// Wait until everything queued before this call has been written.
    fn flush(&mut self) -> Result<()> {
        let (ack, done) = bounded(1);
        self.sender()?
            .send(Command::Flush(ack))
            .map_err(|_| LoggerError::writer("async worker stopped"))?;
        done.recv()
            .map_err(|_| LoggerError::writer("async worker stopped before flushing"))?
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for AsyncSink {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}
