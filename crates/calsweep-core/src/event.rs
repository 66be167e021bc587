//! Normalized calendar events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event with fully resolved start and end instants.
///
/// This is the canonical representation after normalization: both `start`
/// and `end` are always concrete points in time, never bare dates. All-day
/// events have been resolved to `[midnight, midnight + 1 day − 1 s]` by the
/// normalization pipeline before this type is constructed.
///
/// The textual form (serde, [`start_rfc3339`](Self::start_rfc3339)) is
/// RFC 3339, which is stable and round-trippable by callers that re-parse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Unique identifier for the event within the provider.
    pub id: String,
    /// The event title/summary. Empty if the provider supplied none.
    pub summary: String,
    /// When the event starts.
    pub start: DateTime<Utc>,
    /// When the event ends.
    pub end: DateTime<Utc>,
}

impl NormalizedEvent {
    /// Creates a new normalized event.
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            start,
            end,
        }
    }

    /// Returns true if the event has ended strictly before `now`.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }

    /// The start instant as an RFC 3339 string.
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339()
    }

    /// The end instant as an RFC 3339 string.
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn is_past_is_strict() {
        let event = NormalizedEvent::new(
            "evt-1",
            "Standup",
            utc(2024, 3, 1, 10, 0, 0),
            utc(2024, 3, 1, 10, 30, 0),
        );

        assert!(event.is_past(utc(2024, 3, 1, 10, 30, 1)));
        assert!(!event.is_past(utc(2024, 3, 1, 10, 30, 0)));
        assert!(!event.is_past(utc(2024, 3, 1, 10, 0, 0)));
    }

    #[test]
    fn rfc3339_rendering() {
        let event = NormalizedEvent::new(
            "evt-1",
            "Standup",
            utc(2024, 3, 1, 0, 0, 0),
            utc(2024, 3, 1, 23, 59, 59),
        );

        assert_eq!(event.start_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(event.end_rfc3339(), "2024-03-01T23:59:59+00:00");
    }

    #[test]
    fn serde_roundtrip() {
        let event = NormalizedEvent::new(
            "evt-1",
            "Standup",
            utc(2024, 3, 1, 10, 0, 0),
            utc(2024, 3, 1, 10, 30, 0),
        );

        let json = serde_json::to_string(&event).unwrap();
        let parsed: NormalizedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
