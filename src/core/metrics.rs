//! Logger metrics for observability
//!
//! Counters for lines written, lines filtered out by the threshold, trigger
//! invocations, sink failures and lenient-parse misconfigurations.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.suppression_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    lines_written: AtomicU64,

    /// Emissions below the filter threshold
    lines_suppressed: AtomicU64,

    /// Trigger callback invocations
    triggers_fired: AtomicU64,

    /// Sink writes that returned an error or panicked
    write_failures: AtomicU64,

    /// Unrecognized severity names accepted by the lenient setters
    misconfigurations: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            lines_suppressed: AtomicU64::new(0),
            triggers_fired: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            misconfigurations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_suppressed(&self) -> u64 {
        self.lines_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn triggers_fired(&self) -> u64 {
        self.triggers_fired.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn misconfigurations(&self) -> u64 {
        self.misconfigurations.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.lines_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_trigger(&self) -> u64 {
        self.triggers_fired.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_misconfiguration(&self) -> u64 {
        self.misconfigurations.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emissions filtered out by the threshold, as a percentage
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.lines_suppressed() as f64;
        let total = self.lines_written() as f64 + self.write_failures() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.lines_suppressed.store(0, Ordering::Relaxed);
        self.triggers_fired.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.misconfigurations.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            lines_suppressed: AtomicU64::new(self.lines_suppressed()),
            triggers_fired: AtomicU64::new(self.triggers_fired()),
            write_failures: AtomicU64::new(self.write_failures()),
            misconfigurations: AtomicU64::new(self.misconfigurations()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.lines_suppressed(), 0);
        assert_eq!(metrics.triggers_fired(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.misconfigurations(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_trigger(), 0);
        assert_eq!(metrics.record_trigger(), 1);
        assert_eq!(metrics.triggers_fired(), 2);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_suppressed();
        }

        let rate = metrics.suppression_rate();
        assert!((9.9..=10.1).contains(&rate), "Suppression rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_misconfiguration();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.misconfigurations(), 0);
        assert_eq!(snapshot.lines_written(), 1);
        assert_eq!(snapshot.misconfigurations(), 1);
    }
}
