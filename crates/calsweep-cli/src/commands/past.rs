//! `calsweep past` - list past events from the last N days.

use chrono::Utc;

use crate::commands::QueryContext;
use crate::config::ClientConfig;
use crate::error::CliResult;
use crate::render;

pub async fn run(
    config: &ClientConfig,
    override_token: Option<&str>,
    json: bool,
    days: u32,
) -> CliResult<()> {
    let ctx = QueryContext::new(config, override_token)?;
    let events = ctx.service().past_events(days, Utc::now()).await?;
    render::print_events(&events, json)
}
