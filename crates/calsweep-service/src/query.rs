//! Event query and deletion operations.
//!
//! [`EventQueryService`] is the orchestrating layer: it builds the query
//! window, asks the provider for raw events, runs them through the
//! normalization pipeline, and applies the operation's filter. Ordering
//! (start time ascending) is delegated to the provider query and not
//! re-established here.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info};

use calsweep_core::{NormalizedEvent, SummaryDenyList, TimeWindow};
use calsweep_providers::{CalendarProvider, ProviderError, ProviderResult, normalize_events};

/// The query and deletion operations over a calendar provider.
///
/// Holds a reference to the provider and the process-wide deny-list; the
/// timezone governs all-day resolution and day boundaries. The current
/// instant is passed into each time-dependent operation by the caller.
pub struct EventQueryService<'a, Tz: TimeZone> {
    provider: &'a dyn CalendarProvider,
    deny_list: &'a SummaryDenyList,
    tz: Tz,
}

impl<'a, Tz: TimeZone> EventQueryService<'a, Tz> {
    /// Creates a new service.
    pub fn new(provider: &'a dyn CalendarProvider, deny_list: &'a SummaryDenyList, tz: Tz) -> Self {
        Self {
            provider,
            deny_list,
            tz,
        }
    }

    /// Returns today's remaining events: window `[now, end-of-today)`,
    /// every event normalized, no additional filter.
    pub async fn today_upcoming_events(
        &self,
        now: DateTime<Utc>,
    ) -> ProviderResult<Vec<NormalizedEvent>> {
        let window = TimeWindow::today_remaining(now, &self.tz);
        debug!("querying upcoming events in [{}, {})", window.start, window.end);

        let raw = self.provider.list_events(window).await?;
        normalize_events(&raw, &self.tz)
    }

    /// Returns events from the last `days` days that have already ended.
    ///
    /// The window is `[start-of-today − days, now)`; events overlapping the
    /// `now` boundary are dropped by re-checking `end < now` after
    /// normalization.
    pub async fn past_events(
        &self,
        days: u32,
        now: DateTime<Utc>,
    ) -> ProviderResult<Vec<NormalizedEvent>> {
        if days == 0 {
            return Err(ProviderError::bad_request("days must be positive"));
        }

        let window = TimeWindow::past_days(days, now, &self.tz);
        debug!("querying past events in [{}, {})", window.start, window.end);

        let raw = self.provider.list_events(window).await?;
        let events = normalize_events(&raw, &self.tz)?;

        Ok(events.into_iter().filter(|e| e.is_past(now)).collect())
    }

    /// Returns the past events whose summary is in the deny-list.
    pub async fn events_for_deletion(
        &self,
        days: u32,
        now: DateTime<Utc>,
    ) -> ProviderResult<Vec<NormalizedEvent>> {
        let past = self.past_events(days, now).await?;
        Ok(past
            .into_iter()
            .filter(|e| self.deny_list.contains(&e.summary))
            .collect())
    }

    /// Deletes the given events one at a time, in order, awaiting each
    /// call before issuing the next.
    ///
    /// # Errors
    ///
    /// The first failing delete propagates immediately; later events are
    /// not attempted and already-deleted ones are not rolled back.
    pub async fn delete_events(&self, events: &[NormalizedEvent]) -> ProviderResult<()> {
        for event in events {
            self.provider.delete_event(&event.id).await?;
            info!("deleted event {} ({:?})", event.id, event.summary);
        }
        Ok(())
    }
}
