//! Property-based tests for leveled_logger using proptest

use leveled_logger::prelude::*;
use leveled_logger::{call_info, level_to_str, str_to_level};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Notice),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

/// A known name with every character's case chosen independently.
fn mixed_case_name() -> impl Strategy<Value = (Severity, String)> {
    (any_severity(), prop::collection::vec(any::<bool>(), 8)).prop_map(|(severity, upper)| {
        let name: String = severity
            .to_str()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        (severity, name)
    })
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    #[test]
    fn test_name_roundtrip_any_case((severity, name) in mixed_case_name()) {
        prop_assert_eq!(name.parse::<Severity>().unwrap(), severity);
        prop_assert_eq!(str_to_level(&name), Threshold::At(severity));
        prop_assert_eq!(level_to_str(severity.as_u8()), severity.to_str());
    }

    #[test]
    fn test_ordering_matches_numeric(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a <= b, a.as_u8() <= b.as_u8());
        prop_assert_eq!(a < b, a.as_u8() < b.as_u8());
    }

    #[test]
    fn test_unrecognized_names_never_admit(name in "[a-z]{0,12}", severity in any_severity()) {
        let known = ["debug", "info", "notice", "warn", "error", "critical"];
        prop_assume!(!known.contains(&name.as_str()));

        let threshold = str_to_level(&name);
        prop_assert_eq!(threshold, Threshold::Never);
        prop_assert!(!threshold.admits(severity));
    }

    #[test]
    fn test_out_of_range_is_unknown(raw in 6u8..=u8::MAX) {
        prop_assert_eq!(level_to_str(raw), "Unknown");
    }
}

// ============================================================================
// Logger Filtering and Trigger Tests
// ============================================================================

proptest! {
    #[test]
    fn test_prints_iff_at_or_above_threshold(
        threshold in any_severity(),
        emitted in prop::collection::vec(any_severity(), 0..32)
    ) {
        let sink = MemorySink::new();
        let logger = Logger::with_sink(sink.clone());
        logger.set_threshold(threshold);

        for severity in &emitted {
            logger.log(*severity, call_info!(), format_args!("m"));
        }

        let expected = emitted.iter().filter(|s| **s >= threshold).count();
        prop_assert_eq!(sink.len(), expected);
        prop_assert_eq!(logger.metrics().lines_suppressed() as usize, emitted.len() - expected);
    }

    #[test]
    fn test_trigger_iff_at_or_above_trigger_threshold(
        level in any_severity(),
        trigger in any_severity(),
        emitted in prop::collection::vec(any_severity(), 0..32)
    ) {
        let logger = Logger::with_sink(MemorySink::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        logger.set_threshold(level);
        logger.set_trigger(trigger.to_str(), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        for severity in &emitted {
            logger.log(*severity, call_info!(), format_args!("m"));
        }

        // Independent of the filter threshold.
        let expected = emitted.iter().filter(|s| **s >= trigger).count();
        prop_assert_eq!(fired.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn test_every_line_is_single_and_well_formed(message in ".*", severity in any_severity()) {
        let sink = MemorySink::new();
        let logger = Logger::with_sink(sink.clone());

        logger.log(severity, call_info!(), format_args!("{}", message));

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        let line = &lines[0];
        prop_assert!(!line.contains('\n') && !line.contains('\r'));
        let expected_tag = format!(" [{}] ", severity);
        prop_assert!(line[19..].starts_with(&expected_tag), "bad tag in {:?}", line);
        prop_assert!(line.contains("] property_tests "), "bad package in {:?}", line);
        let prefix = line.split(") > ").next().unwrap_or_default();
        prop_assert!(!prefix.contains(" ?(:"), "missing function in {:?}", line);
    }
}
