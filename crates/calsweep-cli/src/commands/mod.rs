//! Command implementations.

pub mod config;
pub mod past;
pub mod purge;
pub mod today;

use chrono::Local;

use calsweep_core::SummaryDenyList;
use calsweep_providers::google::GoogleCalendar;
use calsweep_service::EventQueryService;

use crate::config::ClientConfig;
use crate::error::{CliError, CliResult};

/// Provider and deny-list assembled from configuration, owning what the
/// query service borrows.
pub(crate) struct QueryContext {
    provider: GoogleCalendar,
    deny_list: SummaryDenyList,
}

impl QueryContext {
    /// Builds the context from configuration and an optional token override.
    pub(crate) fn new(config: &ClientConfig, override_token: Option<&str>) -> CliResult<Self> {
        let tokens = config
            .google
            .token_source(override_token)
            .map_err(CliError::Config)?;
        let provider = GoogleCalendar::new(config.google.to_provider_config(), tokens)?;

        Ok(Self {
            provider,
            deny_list: config.deny_list(),
        })
    }

    /// Returns a query service operating in the local timezone.
    pub(crate) fn service(&self) -> EventQueryService<'_, Local> {
        EventQueryService::new(&self.provider, &self.deny_list, Local)
    }
}
