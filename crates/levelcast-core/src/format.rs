//! Rendering of log events into human-readable lines
//!
//! A formatted line is always `<timestamp> <severity tag> <message>`:
//!
//! ```text
//! [2026-10-19T08:30:00.123Z] 🟠[WARN] Low disk space
//! ```
//!
//! With color enabled the timestamp is wrapped in cyan and the tag in the
//! severity's own color. The message text is never altered.

use std::io::IsTerminal;

use crate::event::LogEvent;
use crate::severity::{Severity, RESET};

const TIMESTAMP_COLOR: &str = "\x1b[36m";

/// Whether ANSI color codes are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Always emit color codes
    #[default]
    Always,
    /// Never emit color codes
    Never,
    /// Color only when stdout is a terminal and `NO_COLOR` is unset
    Auto,
}

impl ColorMode {
    /// Resolve `Auto` against the current process environment
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Formats events into the line handed to subscribers
#[derive(Debug, Clone, Copy)]
pub struct MessageFormatter {
    colored: bool,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl MessageFormatter {
    /// Create a formatter; `Auto` is resolved once, here
    pub fn new(mode: ColorMode) -> Self {
        Self {
            colored: mode.enabled(),
        }
    }

    /// Formatter that never emits escape codes
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Symbol plus bracketed uppercase name, e.g. `🔴[SEVERE]`
    pub fn severity_tag(&self, severity: Severity) -> String {
        if self.colored {
            format!(
                "{}{}[{}]{}",
                severity.color(),
                severity.symbol(),
                severity.as_upper(),
                RESET
            )
        } else {
            format!("{}[{}]", severity.symbol(), severity.as_upper())
        }
    }

    pub fn timestamp(&self, event: &LogEvent) -> String {
        if self.colored {
            format!("{}[{}]{}", TIMESTAMP_COLOR, event.timestamp_iso(), RESET)
        } else {
            format!("[{}]", event.timestamp_iso())
        }
    }

    pub fn format(&self, event: &LogEvent) -> String {
        format!(
            "{} {} {}",
            self.timestamp(event),
            self.severity_tag(event.severity),
            event.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(severity: Severity, message: &str) -> LogEvent {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        LogEvent::at(severity, message, at)
    }

    #[test]
    fn test_colored_format() {
        let formatter = MessageFormatter::new(ColorMode::Always);
        let line = formatter.format(&event(Severity::Severe, "CRITICAL ERROR"));
        assert_eq!(
            line,
            "\x1b[36m[2026-10-19T08:30:00.000Z]\x1b[0m \x1b[31m🔴[SEVERE]\x1b[0m CRITICAL ERROR"
        );
    }

    #[test]
    fn test_plain_format() {
        let formatter = MessageFormatter::new(ColorMode::Never);
        let line = formatter.format(&event(Severity::Warn, "Low disk space"));
        assert_eq!(line, "[2026-10-19T08:30:00.000Z] 🟠[WARN] Low disk space");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_ordering_timestamp_tag_message() {
        let formatter = MessageFormatter::plain();
        let line = formatter.format(&event(Severity::Info, "User logged in"));
        let ts = line.find("2026-10-19").unwrap();
        let tag = line.find("[INFO]").unwrap();
        let msg = line.find("User logged in").unwrap();
        assert!(ts < tag && tag < msg);
    }

    #[test]
    fn test_message_is_verbatim() {
        let raw = "x=42 [TRACE] \x1b[0m ünïcødé";
        for mode in [ColorMode::Always, ColorMode::Never] {
            let line = MessageFormatter::new(mode).format(&event(Severity::Debug, raw));
            assert!(line.ends_with(raw));
            assert!(line.contains("DEBUG"));
        }
    }

    #[test]
    fn test_each_severity_has_own_color() {
        let formatter = MessageFormatter::new(ColorMode::Always);
        for level in Severity::ALL {
            let tag = formatter.severity_tag(level);
            assert!(tag.starts_with(level.color()));
            assert!(tag.contains(level.as_upper()));
            assert!(tag.ends_with(RESET));
        }
    }
}
