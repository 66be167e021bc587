//! `calsweep today` - list today's remaining events.

use chrono::Utc;

use crate::commands::QueryContext;
use crate::config::ClientConfig;
use crate::error::CliResult;
use crate::render;

pub async fn run(config: &ClientConfig, override_token: Option<&str>, json: bool) -> CliResult<()> {
    let ctx = QueryContext::new(config, override_token)?;
    let events = ctx.service().today_upcoming_events(Utc::now()).await?;
    render::print_events(&events, json)
}
