//! Log events handed to subscribers

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// A single log call that passed the threshold
///
/// Created at the moment of dispatch and dropped once every subscriber has
/// seen it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Create an event stamped with the current wall-clock time
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(severity, message, Utc::now())
    }

    /// Create an event with an explicit timestamp
    pub fn at(severity: Severity, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp,
        }
    }

    /// Timestamp as ISO-8601 with millisecond precision, e.g. `2026-10-19T08:30:00.123Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Payload delivered to global subscribers: the event plus its rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    #[serde(flatten)]
    pub event: LogEvent,
    pub formatted_message: String,
}

impl MessageEvent {
    pub fn new(event: LogEvent, formatted_message: impl Into<String>) -> Self {
        Self {
            event,
            formatted_message: formatted_message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.event.severity
    }

    pub fn message(&self) -> &str {
        &self.event.message
    }

    pub fn formatted_message(&self) -> &str {
        &self.formatted_message
    }

    /// Serialize as a JSON object (`severity`, `message`, `timestamp`, `formattedMessage`)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_timestamp_iso_format() {
        let event = LogEvent::at(Severity::Info, "hello", fixed_time());
        assert_eq!(event.timestamp_iso(), "2026-10-19T08:30:00.000Z");
    }

    #[test]
    fn test_now_keeps_message_verbatim() {
        let event = LogEvent::now(Severity::Warn, "  spaced \t message ");
        assert_eq!(event.message, "  spaced \t message ");
        assert_eq!(event.severity, Severity::Warn);
    }

    #[test]
    fn test_message_event_json_shape() {
        let event = LogEvent::at(Severity::Severe, "disk full", fixed_time());
        let message = MessageEvent::new(event, "[x] SEVERE disk full");
        let json: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();

        assert_eq!(json["severity"], "severe");
        assert_eq!(json["message"], "disk full");
        assert_eq!(json["formattedMessage"], "[x] SEVERE disk full");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2026-10-19T08:30:00"));
    }

    #[test]
    fn test_message_event_accessors() {
        let event = LogEvent::at(Severity::Debug, "x=42", fixed_time());
        let message = MessageEvent::new(event.clone(), "formatted");
        assert_eq!(message.severity(), Severity::Debug);
        assert_eq!(message.message(), "x=42");
        assert_eq!(message.formatted_message(), "formatted");
        assert_eq!(message.event, event);
    }
}
