//! Google Calendar API client.
//!
//! A low-level HTTP client for the Calendar API v3: time-bounded event
//! listing (single events, start-time ascending, paginated) and delete by
//! id. The client is constructed with the access token for one session and
//! is expected to be short-lived; it holds no other state.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use calsweep_core::TimeWindow;

use crate::error::{ProviderError, ProviderResult};
use crate::google::config::GoogleConfig;
use crate::raw_event::{RawEvent, RawEventTime};

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http_client: reqwest::Client,
    access_token: String,
    calendar_id: String,
}

impl GoogleCalendarClient {
    /// Creates a new client with the given access token.
    pub fn new(access_token: impl Into<String>, config: &GoogleConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            access_token: access_token.into(),
            calendar_id: config.calendar_id.clone(),
        }
    }

    /// Lists events within `window` from the configured calendar.
    ///
    /// Requests `singleEvents=true` (recurring instances flattened) and
    /// `orderBy=startTime`, so the response comes back ordered by start
    /// time ascending. Pagination is followed to exhaustion.
    pub async fn list_events(&self, window: &TimeWindow) -> ProviderResult<Vec<RawEvent>> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_events_page(window, page_token.as_deref()).await?;

            for event in page.items {
                all_events.push(convert_event(event)?);
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            "fetched {} events from calendar {}",
            all_events.len(),
            self.calendar_id
        );
        Ok(all_events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        window: &TimeWindow,
        page_token: Option<&str>,
    ) -> ProviderResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(&self.calendar_id)
        );

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", window.start.to_rfc3339()),
                ("timeMax", window.end.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token.to_string())]);
        }

        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse response: {}", e))
                .with_source(e)
        })
    }

    /// Deletes a single event by id from the configured calendar.
    pub async fn delete_event(&self, event_id: &str) -> ProviderResult<()> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            CALENDAR_API_BASE,
            urlencoding::encode(&self.calendar_id),
            urlencoding::encode(event_id)
        );

        let response = self
            .http_client
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, &body));
        }

        debug!("deleted event {} from calendar {}", event_id, self.calendar_id);
        Ok(())
    }
}

/// Maps a reqwest transport failure to a provider error.
fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::network("request timeout").with_source(e)
    } else if e.is_connect() {
        ProviderError::network(format!("connection failed: {}", e))
    } else {
        ProviderError::network(format!("request failed: {}", e))
    }
}

/// Maps a non-success HTTP status to a provider error.
fn map_error_status(status: reqwest::StatusCode, body: &str) -> ProviderError {
    use reqwest::StatusCode;

    match status {
        StatusCode::UNAUTHORIZED => {
            ProviderError::authentication("access token expired or invalid")
        }
        StatusCode::FORBIDDEN => ProviderError::authorization("access denied to calendar"),
        StatusCode::NOT_FOUND | StatusCode::GONE => {
            ProviderError::not_found(format!("resource not found ({})", status))
        }
        StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited("rate limit exceeded"),
        StatusCode::BAD_REQUEST => {
            ProviderError::bad_request(format!("invalid request: {}", body))
        }
        _ => ProviderError::server(format!("API error ({}): {}", status, body)),
    }
}

/// Converts a Google Calendar API event to a [`RawEvent`].
///
/// Instant fields are parsed here; date-only fields stay raw for the
/// normalization pipeline. Any unparseable field fails the batch.
fn convert_event(event: ApiEvent) -> ProviderResult<RawEvent> {
    let id = event
        .id
        .ok_or_else(|| ProviderError::invalid_response("event record has no id"))?;

    let start = convert_marker(event.start, &id)?;
    let end = convert_marker(event.end, &id)?;

    let mut raw = RawEvent::new(id, start, end);
    raw.summary = event.summary;
    raw.status = event.status;
    Ok(raw)
}

/// Converts an API time marker, parsing the RFC 3339 instant if present.
fn convert_marker(marker: ApiEventTime, event_id: &str) -> ProviderResult<RawEventTime> {
    let date_time = marker
        .date_time
        .map(|dt| {
            DateTime::parse_from_rfc3339(&dt)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    ProviderError::invalid_response(format!(
                        "event {} has an unparseable dateTime {:?}: {}",
                        event_id, dt, e
                    ))
                    .with_source(e)
                })
        })
        .transpose()?;

    Ok(RawEventTime {
        date_time,
        date: marker.date,
    })
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<ApiEvent>,
    next_page_token: Option<String>,
}

/// A single event from the Google Calendar API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEvent {
    id: Option<String>,
    summary: Option<String>,
    status: Option<String>,
    start: ApiEventTime,
    end: ApiEventTime,
}

/// Event time from the API: `date` for all-day events, `dateTime` otherwise.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEventTime {
    date: Option<String>,
    date_time: Option<String>,
}
