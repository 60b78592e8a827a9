//! Timestamp formatting for the line prefix
//!
//! Lines are stamped in local time. The default layout is
//! `YYYY/MM/DD HH:MM:SS`, which downstream tooling parses, so alternative
//! layouts are opt-in.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// strftime layout of [`TimestampFormat::Standard`].
pub const STANDARD_LAYOUT: &str = "%Y/%m/%d %H:%M:%S";

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use leveled_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025/01/08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// RFC 3339 with offset: `2025-01-08T10:30:45+09:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Reject a `Custom` layout chrono cannot render.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] naming the bad layout.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Render `datetime`. A `Custom` layout that fails to render falls back
    /// to [`STANDARD_LAYOUT`].
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD_LAYOUT).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => datetime.format(STANDARD_LAYOUT).to_string(),
                }
            }
        }
    }

    /// Format the current local time.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_standard_format() {
        let result = TimestampFormat::Standard.format(&fixed_datetime());
        assert_eq!(result, "2025/01/08 10:30:45");
    }

    #[test]
    fn test_standard_format_keeps_local_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        let at = fixed_datetime().with_timezone(&tokyo);
        assert_eq!(TimestampFormat::Standard.format(&at), "2025/01/08 19:30:45");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_format() {
        let result = TimestampFormat::Unix.format(&fixed_datetime());
        assert_eq!(result, "1736332245");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_invalid_custom_layout() {
        let format = TimestampFormat::Custom("%Q bad".to_string());
        assert!(matches!(
            format.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30:45");

        assert!(TimestampFormat::Custom("%d/%b/%Y".to_string()).validate().is_ok());
        assert!(TimestampFormat::Standard.validate().is_ok());
    }

    #[test]
    fn test_now_matches_layout() {
        let stamp = TimestampFormat::default().now();
        assert_eq!(stamp.len(), "2025/01/08 10:30:45".len());
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[10..11], " ");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Standard).expect("serialize");
        assert_eq!(json, "\"Standard\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
