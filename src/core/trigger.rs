//! Severity-triggered callbacks

use super::severity::{Severity, Threshold};
use std::fmt;
use std::sync::Arc;

/// Callback run when an emitted message reaches the trigger threshold.
///
/// Runs synchronously on the thread that emitted the message.
pub type TriggerCallback = Arc<dyn Fn() + Send + Sync>;

/// A (threshold, callback) registration. A logger holds at most one.
#[derive(Clone)]
pub struct Trigger {
    threshold: Threshold,
    action: TriggerCallback,
}

impl Trigger {
    pub fn new(threshold: impl Into<Threshold>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            threshold: threshold.into(),
            action: Arc::new(action),
        }
    }

    pub fn from_callback(threshold: Threshold, action: TriggerCallback) -> Self {
        Self { threshold, action }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[inline]
    pub fn fires_for(&self, severity: Severity) -> bool {
        self.threshold.admits(severity)
    }

    /// Shared handle to the callback, so it can run outside any lock.
    pub fn action(&self) -> TriggerCallback {
        Arc::clone(&self.action)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fires_at_or_above_threshold() {
        let trigger = Trigger::new(Severity::Error, || {});
        assert!(!trigger.fires_for(Severity::Warn));
        assert!(trigger.fires_for(Severity::Error));
        assert!(trigger.fires_for(Severity::Critical));
    }

    #[test]
    fn test_never_threshold() {
        let trigger = Trigger::new(Threshold::Never, || {});
        assert!(Severity::ALL.iter().all(|s| !trigger.fires_for(*s)));
    }

    #[test]
    fn test_action_shares_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let trigger = Trigger::new(Severity::Debug, move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let action = trigger.action();
        action();
        (trigger.action())();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_hides_callback() {
        let trigger = Trigger::new(Severity::Critical, || {});
        let rendered = format!("{:?}", trigger);
        assert!(rendered.contains("Critical"));
        assert!(rendered.contains(".."));
    }
}
