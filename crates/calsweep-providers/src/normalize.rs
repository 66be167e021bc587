//! RawEvent to NormalizedEvent conversion pipeline.
//!
//! Resolution rules for each time marker:
//! - a full instant is used verbatim,
//! - a date-only start marker resolves to midnight of that date in the
//!   given timezone,
//! - a date-only end marker resolves to midnight of that date minus one
//!   second, so a one-day all-day event spans
//!   `[midnight, midnight + 1 day − 1 s]` and does not touch the next day.
//!
//! Date strings are parsed here; a malformed record fails the whole batch.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use calsweep_core::{NormalizedEvent, midnight_in};

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::{RawEvent, RawEventTime};

/// Which side of the event a marker belongs to. Only the end side gets the
/// one-second adjustment on all-day resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerSide {
    Start,
    End,
}

/// Converts a [`RawEvent`] to a [`NormalizedEvent`], resolving all-day
/// markers to concrete instants in `tz`.
///
/// # Errors
///
/// Returns an `invalid_response` error if a marker carries neither an
/// instant nor a parseable date. There is no per-event recovery.
pub fn normalize_event<Tz: TimeZone>(raw: &RawEvent, tz: &Tz) -> ProviderResult<NormalizedEvent> {
    let start = resolve_marker(&raw.start, tz, MarkerSide::Start, &raw.id)?;
    let end = resolve_marker(&raw.end, tz, MarkerSide::End, &raw.id)?;

    Ok(NormalizedEvent::new(
        &raw.id,
        raw.summary.clone().unwrap_or_default(),
        start,
        end,
    ))
}

/// Resolves a raw time marker to a UTC instant.
fn resolve_marker<Tz: TimeZone>(
    marker: &RawEventTime,
    tz: &Tz,
    side: MarkerSide,
    event_id: &str,
) -> ProviderResult<DateTime<Utc>> {
    if let Some(dt) = marker.date_time {
        return Ok(dt);
    }

    let date = marker.date.as_deref().ok_or_else(|| {
        ProviderError::invalid_response(format!("event {} has an empty time marker", event_id))
    })?;

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        ProviderError::invalid_response(format!(
            "event {} has an unparseable date {:?}: {}",
            event_id, date, e
        ))
        .with_source(e)
    })?;

    let midnight = midnight_in(parsed, tz);
    Ok(match side {
        MarkerSide::Start => midnight,
        MarkerSide::End => midnight - Duration::seconds(1),
    })
}

/// Batch normalize raw events, skipping cancelled tombstones.
///
/// Fails on the first malformed record; no partial result is returned.
pub fn normalize_events<Tz: TimeZone>(
    raw_events: &[RawEvent],
    tz: &Tz,
) -> ProviderResult<Vec<NormalizedEvent>> {
    raw_events
        .iter()
        .filter(|e| !e.is_cancelled())
        .map(|e| normalize_event(e, tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn timed_markers_pass_through_unadjusted() {
        let raw = RawEvent::new(
            "evt-1",
            RawEventTime::from_datetime(utc(2024, 3, 1, 10, 0, 0)),
            RawEventTime::from_datetime(utc(2024, 3, 1, 11, 0, 0)),
        )
        .with_summary("Planning");

        let event = normalize_event(&raw, &Utc).unwrap();
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.summary, "Planning");
        assert_eq!(event.start, utc(2024, 3, 1, 10, 0, 0));
        assert_eq!(event.end, utc(2024, 3, 1, 11, 0, 0));
    }

    #[test]
    fn all_day_event_resolves_to_midnight_span() {
        // One-day all-day event: the provider's end date is exclusive.
        let raw = RawEvent::new(
            "x",
            RawEventTime::from_date("2024-03-01"),
            RawEventTime::from_date("2024-03-02"),
        )
        .with_summary("Standup");

        let event = normalize_event(&raw, &Utc).unwrap();
        assert_eq!(event.start, utc(2024, 3, 1, 0, 0, 0));
        assert_eq!(event.end, utc(2024, 3, 1, 23, 59, 59));
    }

    #[test]
    fn all_day_resolution_uses_given_timezone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let raw = RawEvent::new(
            "x",
            RawEventTime::from_date("2024-03-01"),
            RawEventTime::from_date("2024-03-02"),
        );

        let event = normalize_event(&raw, &tz).unwrap();
        assert_eq!(event.start, utc(2024, 2, 29, 22, 0, 0));
        assert_eq!(event.end, utc(2024, 3, 1, 21, 59, 59));
    }

    #[test]
    fn missing_summary_becomes_empty_string() {
        let raw = RawEvent::new(
            "evt-1",
            RawEventTime::from_datetime(utc(2024, 3, 1, 10, 0, 0)),
            RawEventTime::from_datetime(utc(2024, 3, 1, 11, 0, 0)),
        );

        let event = normalize_event(&raw, &Utc).unwrap();
        assert_eq!(event.summary, "");
    }

    #[test]
    fn unparseable_date_is_fatal() {
        let raw = RawEvent::new(
            "evt-bad",
            RawEventTime::from_date("not-a-date"),
            RawEventTime::from_date("2024-03-02"),
        );

        let err = normalize_event(&raw, &Utc).unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
        assert!(err.message().contains("evt-bad"));
    }

    #[test]
    fn empty_marker_is_fatal() {
        let raw = RawEvent::new(
            "evt-empty",
            RawEventTime::default(),
            RawEventTime::from_date("2024-03-02"),
        );

        let err = normalize_event(&raw, &Utc).unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::InvalidResponse);
    }

    #[test]
    fn batch_skips_cancelled_events() {
        let events = vec![
            RawEvent::new(
                "evt-1",
                RawEventTime::from_datetime(utc(2024, 3, 1, 10, 0, 0)),
                RawEventTime::from_datetime(utc(2024, 3, 1, 11, 0, 0)),
            ),
            RawEvent::new(
                "evt-cancelled",
                RawEventTime::from_datetime(utc(2024, 3, 1, 12, 0, 0)),
                RawEventTime::from_datetime(utc(2024, 3, 1, 13, 0, 0)),
            )
            .with_status("cancelled"),
        ];

        let normalized = normalize_events(&events, &Utc).unwrap();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].id, "evt-1");
    }

    #[test]
    fn batch_fails_fast_on_malformed_record() {
        let events = vec![
            RawEvent::new(
                "evt-1",
                RawEventTime::from_datetime(utc(2024, 3, 1, 10, 0, 0)),
                RawEventTime::from_datetime(utc(2024, 3, 1, 11, 0, 0)),
            ),
            RawEvent::new(
                "evt-bad",
                RawEventTime::from_date("03/01/2024"),
                RawEventTime::from_date("2024-03-02"),
            ),
        ];

        assert!(normalize_events(&events, &Utc).is_err());
    }
}
