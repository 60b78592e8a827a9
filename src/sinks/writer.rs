//! Sink over any `std::io::Write`

use crate::core::{LogRecord, Result, Sink};
use std::io::{self, Write};

/// Writes each record as one `\n`-terminated line to a byte stream.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: &'static str,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer",
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
            name: "stdout",
        }
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            writer: io::stderr(),
            name: "stderr",
        }
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        writeln!(self.writer, "{}", record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}
