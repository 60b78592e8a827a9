//! Process-wide logger with explicit initialization
//!
//! Nothing is installed implicitly: [`get`] returns `None` until [`init`] has
//! run, and [`init`] succeeds exactly once.

use crate::core::{Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide instance.
///
/// # Example
///
/// ```
/// use leveled_logger::{global, info, Logger};
///
/// global::init(Logger::new(std::io::stdout())).unwrap();
///
/// if let Some(logger) = global::get() {
///     info!(logger, "ready on port {}", 8080);
/// }
/// ```
///
/// # Errors
///
/// Returns [`LoggerError::AlreadyInitialized`] if a logger is already
/// installed; the argument is dropped in that case.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    let mut installed = false;
    let global = GLOBAL_LOGGER.get_or_init(|| {
        installed = true;
        logger
    });
    if installed {
        Ok(global)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

pub fn get() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}
