//! Google Calendar provider implementation.

use std::sync::Arc;

use calsweep_core::TimeWindow;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{BoxFuture, CalendarProvider};
use crate::raw_event::RawEvent;
use crate::token::TokenSource;

use super::client::GoogleCalendarClient;
use super::config::GoogleConfig;

/// Google Calendar provider.
///
/// Each operation obtains the current session's access token from the
/// [`TokenSource`] and builds a fresh authenticated client, so the provider
/// itself never holds credentials. A missing token fails the operation
/// before any API request goes out.
pub struct GoogleCalendar {
    config: GoogleConfig,
    tokens: Arc<dyn TokenSource>,
}

impl GoogleCalendar {
    /// Creates a new Google provider with the given configuration and
    /// token source.
    pub fn new(config: GoogleConfig, tokens: Arc<dyn TokenSource>) -> ProviderResult<Self> {
        config.validate().map_err(ProviderError::configuration)?;
        Ok(Self { config, tokens })
    }

    /// Builds a client authenticated with the current session token.
    fn authenticated_client(&self) -> ProviderResult<GoogleCalendarClient> {
        let token = self.tokens.access_token()?;
        Ok(GoogleCalendarClient::new(token, &self.config))
    }
}

impl CalendarProvider for GoogleCalendar {
    fn name(&self) -> &str {
        "google"
    }

    fn list_events(&self, window: TimeWindow) -> BoxFuture<'_, ProviderResult<Vec<RawEvent>>> {
        Box::pin(async move {
            let client = self.authenticated_client()?;
            client.list_events(&window).await
        })
    }

    fn delete_event<'a>(&'a self, event_id: &'a str) -> BoxFuture<'a, ProviderResult<()>> {
        Box::pin(async move {
            let client = self.authenticated_client()?;
            client.delete_event(event_id).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use crate::token::StaticToken;
    use chrono::{TimeZone, Utc};

    fn test_window() -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn provider_name() {
        let provider =
            GoogleCalendar::new(GoogleConfig::new(), Arc::new(StaticToken::new("token"))).unwrap();
        assert_eq!(provider.name(), "google");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GoogleConfig::new().with_calendar_id("");
        let result = GoogleCalendar::new(config, Arc::new(StaticToken::new("token")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let provider =
            GoogleCalendar::new(GoogleConfig::new(), Arc::new(StaticToken::new(""))).unwrap();

        let err = provider.list_events(test_window()).await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);

        let err = provider.delete_event("evt-1").await.unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
    }
}
