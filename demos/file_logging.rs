//! File logging example
//!
//! Appends to `application.log`, reporting an unusable path as an error
//! instead of aborting.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use leveled_logger::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let logger = match Logger::with_file("application.log") {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to create log file, error: {}", e);
            return Err(e);
        }
    };
    logger.set_level("info");

    info!(logger, "Application started");
    debug!(logger, "Loading configuration..."); // filtered out
    info!(logger, "Configuration loaded successfully");

    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i);
        if i == 3 {
            warn!(logger; "Item ", i, " took longer than expected");
        }
    }

    logger.flush()?;

    let metrics = logger.metrics();
    println!("Lines written: {}", metrics.lines_written());
    println!("Lines suppressed: {}", metrics.lines_suppressed());
    println!("\nCheck 'application.log' for the full log output");

    Ok(())
}
