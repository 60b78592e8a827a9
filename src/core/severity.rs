//! Severity levels and thresholds

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Notice = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Notice => "Notice",
            Severity::Warn => "Warn",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => BrightBlack,
            Severity::Info => Green,
            Severity::Notice => Cyan,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::Critical => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(LoggerError::unknown_severity(s)),
        }
    }
}

/// Minimum severity an action (printing, triggering) requires.
///
/// `Never` sits above every real severity, so a threshold parsed from an
/// unrecognized name silently disables whatever it guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Threshold {
    At(Severity),
    Never,
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::ALL
    }
}

impl Threshold {
    /// Raw value used for `Never`, well above `Critical`.
    pub const NEVER_RAW: u8 = 100;

    /// Lowest threshold; everything passes.
    pub const ALL: Threshold = Threshold::At(Severity::Debug);

    /// Whether a message of `severity` satisfies this threshold.
    #[inline]
    pub fn admits(self, severity: Severity) -> bool {
        severity.as_u8() >= self.raw()
    }

    /// Numeric form, comparable against `Severity::as_u8`.
    pub fn raw(self) -> u8 {
        match self {
            Threshold::At(severity) => severity.as_u8(),
            Threshold::Never => Self::NEVER_RAW,
        }
    }

    pub fn severity(self) -> Option<Severity> {
        match self {
            Threshold::At(severity) => Some(severity),
            Threshold::Never => None,
        }
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Threshold::At(severity)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(level_to_str(self.raw()))
    }
}

/// Lenient name lookup: unknown names map to `Threshold::Never`.
pub fn str_to_level(name: &str) -> Threshold {
    name.parse::<Severity>()
        .map(Threshold::At)
        .unwrap_or(Threshold::Never)
}

/// Display name for a raw severity value, `"Unknown"` outside 0..=5.
pub fn level_to_str(raw: u8) -> &'static str {
    Severity::from_u8(raw).map_or("Unknown", |severity| severity.to_str())
}
