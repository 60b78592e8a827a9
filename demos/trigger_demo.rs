//! Threshold and trigger example
//!
//! Prints warnings and above to stdout and runs a callback once a critical
//! message is emitted.
//!
//! Run with: cargo run --example trigger_demo

use leveled_logger::prelude::*;
use leveled_logger::{critical, error, notice, warn};

fn on_critical() {
    println!("Critical happened.");
}

fn main() {
    let logger = Logger::new(std::io::stdout());
    logger.set_level("warn").set_trigger("critical", on_critical);

    notice!(logger, "Notice"); // below the threshold, not printed
    warn!(logger, "warn");
    error!(logger, "error");
    critical!(logger, "critical");
}
