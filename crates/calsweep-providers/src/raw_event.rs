//! Raw event type from the calendar provider.
//!
//! [`RawEvent`] preserves event data as it comes off the wire, before
//! normalization. The start and end markers keep the provider's split
//! representation: either a full instant (`date_time`) or a calendar date
//! string (`date`) for all-day events, never both. Date strings stay
//! unparsed here; resolution happens in the normalization pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The time marker of a raw event, mirroring the provider wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEventTime {
    /// A specific instant, present for timed events.
    pub date_time: Option<DateTime<Utc>>,
    /// A `YYYY-MM-DD` calendar date, present for all-day events.
    pub date: Option<String>,
}

impl RawEventTime {
    /// Creates a marker for a timed event.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            date_time: Some(dt),
            date: None,
        }
    }

    /// Creates a marker for an all-day event.
    pub fn from_date(date: impl Into<String>) -> Self {
        Self {
            date_time: None,
            date: Some(date.into()),
        }
    }

    /// Returns true if this marker carries only a calendar date.
    pub fn is_all_day(&self) -> bool {
        self.date_time.is_none() && self.date.is_some()
    }
}

/// A raw calendar event from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Unique identifier for the event within the provider.
    pub id: String,
    /// When the event starts.
    pub start: RawEventTime,
    /// When the event ends.
    pub end: RawEventTime,
    /// The event title/summary.
    pub summary: Option<String>,
    /// The event status (e.g. "confirmed", "cancelled").
    pub status: Option<String>,
}

impl RawEvent {
    /// Creates a new raw event with the required fields.
    pub fn new(id: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            summary: None,
            status: None,
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns true if the event is a cancelled tombstone.
    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }
}
