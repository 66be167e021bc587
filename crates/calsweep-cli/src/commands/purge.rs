//! `calsweep purge` - delete past events matching the deny-list.

use std::io::{self, BufRead, Write};

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
    dry_run: bool,
    yes: bool,
) -> CliResult<()> {
    if config.deletion.summaries.is_empty() {
        println!("No deletion titles configured ([deletion] summaries); nothing to do.");
        return Ok(());
    }

    let ctx = QueryContext::new(config, override_token)?;
    let service = ctx.service();

    let events = service.events_for_deletion(days, Utc::now()).await?;
    if events.is_empty() {
        println!("No events eligible for deletion.");
        return Ok(());
    }

    render::print_events(&events, json)?;

    if dry_run {
        println!("Dry run: {} event(s) would be deleted.", events.len());
        return Ok(());
    }

    if !yes && !confirm(&format!("Delete {} event(s)? [y/N] ", events.len()))? {
        println!("Aborted.");
        return Ok(());
    }

    service.delete_events(&events).await?;
    println!("Deleted {} event(s).", events.len());
    Ok(())
}

/// Prompts on stdout and reads a single line from stdin.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
