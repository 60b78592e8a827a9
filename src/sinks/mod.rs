//! Sink implementations

pub mod async_sink;
#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use async_sink::{AsyncSink, DEFAULT_SHUTDOWN_TIMEOUT};
#[cfg(feature = "console")]
pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::Sink;
