//! Severity levels and their fixed presentation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ANSI reset sequence
pub(crate) const RESET: &str = "\x1b[0m";

/// Severity of a log event
///
/// Ordered from least to most severe. The discriminant is the priority used
/// by the threshold check, so `Severity::Warn >= Severity::Info` holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Severe = 4,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Severe,
    ];

    /// Numeric priority (trace=0 … severe=4)
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// Name as accepted in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Severe => "severe",
        }
    }

    /// Uppercase name used in the bracketed tag
    pub fn as_upper(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Severe => "SEVERE",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Severity::Severe => "🔴",
            Severity::Warn => "🟠",
            Severity::Info => "🟡",
            Severity::Debug => "🟢",
            Severity::Trace => "🔵",
        }
    }

    /// ANSI color escape for this severity
    pub fn color(self) -> &'static str {
        match self {
            Severity::Severe => "\x1b[31m",
            Severity::Warn => "\x1b[38;5;208m",
            Severity::Info => "\x1b[93m",
            Severity::Debug => "\x1b[32m",
            Severity::Trace => "\x1b[34m",
        }
    }

    /// Whether an event of this severity passes `threshold`
    pub fn passes(self, threshold: Severity) -> bool {
        self.priority() >= threshold.priority()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when text does not name a severity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeverityError {
    #[error("unknown severity: \"{0}\" (expected one of severe, warn, info, debug, trace)")]
    Unknown(String),
}

pub type SeverityResult<T> = Result<T, SeverityError>;

impl FromStr for Severity {
    type Err = SeverityError;

    /// Exact, case-sensitive match against the configuration names
    fn from_str(s: &str) -> SeverityResult<Self> {
        Severity::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| SeverityError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Severity::Debug > Severity::Trace);
        assert!(Severity::Info > Severity::Debug);
        assert!(Severity::Warn > Severity::Info);
        assert!(Severity::Severe > Severity::Warn);

        let priorities: Vec<u8> = Severity::ALL.iter().map(|s| s.priority()).collect();
        assert_eq!(priorities, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_passes_is_inclusive() {
        assert!(Severity::Info.passes(Severity::Info));
        assert!(Severity::Severe.passes(Severity::Info));
        assert!(!Severity::Debug.passes(Severity::Info));
        assert!(Severity::Trace.passes(Severity::Trace));
    }

    #[test]
    fn test_parse_exact_names() {
        for level in Severity::ALL {
            assert_eq!(level.as_str().parse::<Severity>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "INFO".parse::<Severity>(),
            Err(SeverityError::Unknown("INFO".to_string()))
        );
        assert!("verbose".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
        assert!(" info".parse::<Severity>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Severe).unwrap();
        assert_eq!(json, "\"severe\"");
        let parsed: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, Severity::Warn);
    }

    #[test]
    fn test_error_message_names_value() {
        let err = "loud".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("\"loud\""));
    }
}
