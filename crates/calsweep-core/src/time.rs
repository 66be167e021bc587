//! Query windows for calendar event retrieval.
//!
//! This module provides [`TimeWindow`], the `[start, end)` UTC interval used
//! to bound a provider query, along with the two constructors the query
//! operations need: the remainder of today and a trailing span of past days.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A time window for querying calendar events.
///
/// Represents an interval `[start, end)` in UTC. No ordering invariant is
/// enforced here; the bounds are passed through to the provider, which
/// applies its own rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates the window for the remainder of today: `[now, end-of-today)`,
    /// where end-of-today is the start of tomorrow in `tz` minus one second.
    pub fn today_remaining<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        let today = now.with_timezone(tz).date_naive();
        let tomorrow = today.succ_opt().expect("valid successor date");
        Self {
            start: now,
            end: midnight_in(tomorrow, tz) - Duration::seconds(1),
        }
    }

    /// Creates the window for the trailing `days` before now:
    /// `[start-of-today − days, now)` in `tz`.
    pub fn past_days<Tz: TimeZone>(days: u32, now: DateTime<Utc>, tz: &Tz) -> Self {
        let today = now.with_timezone(tz).date_naive();
        Self {
            start: midnight_in(today, tz) - Duration::days(i64::from(days)),
            end: now,
        }
    }

    /// Checks if a datetime falls within this window (`[start, end)`).
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }
}

/// Returns midnight of `date` in `tz`, converted to UTC.
pub fn midnight_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"))
        .single()
        .expect("unambiguous local midnight")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn midnight_in_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(midnight_in(date, &Utc), utc(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn midnight_in_offset_zone() {
        // UTC+02:00 -> local midnight is 22:00 UTC the previous day
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(midnight_in(date, &tz), utc(2024, 2, 29, 22, 0, 0));
    }

    #[test]
    fn today_remaining_ends_one_second_before_tomorrow() {
        let now = utc(2024, 3, 1, 14, 30, 0);
        let window = TimeWindow::today_remaining(now, &Utc);
        assert_eq!(window.start, now);
        assert_eq!(window.end, utc(2024, 3, 1, 23, 59, 59));
    }

    #[test]
    fn today_remaining_in_offset_zone() {
        // 23:30 UTC on Mar 1 is already Mar 2 in UTC+02:00, so the window
        // ends one second before Mar 3 local midnight.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = utc(2024, 3, 1, 23, 30, 0);
        let window = TimeWindow::today_remaining(now, &tz);
        assert_eq!(window.end, utc(2024, 3, 2, 21, 59, 59));
    }

    #[test]
    fn past_days_spans_back_from_local_midnight() {
        let now = utc(2024, 3, 10, 9, 15, 0);
        let window = TimeWindow::past_days(7, now, &Utc);
        assert_eq!(window.start, utc(2024, 3, 3, 0, 0, 0));
        assert_eq!(window.end, now);
    }

    #[test]
    fn contains_half_open() {
        let window = TimeWindow::new(utc(2024, 3, 1, 9, 0, 0), utc(2024, 3, 1, 17, 0, 0));
        assert!(window.contains(utc(2024, 3, 1, 9, 0, 0)));
        assert!(window.contains(utc(2024, 3, 1, 16, 59, 59)));
        assert!(!window.contains(utc(2024, 3, 1, 17, 0, 0)));
        assert!(!window.contains(utc(2024, 3, 1, 8, 59, 59)));
    }

    #[test]
    fn serde_roundtrip() {
        let window = TimeWindow::new(utc(2024, 3, 1, 9, 0, 0), utc(2024, 3, 1, 17, 0, 0));
        let json = serde_json::to_string(&window).unwrap();
        let parsed: TimeWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, parsed);
    }
}
