//! Output rendering for event listings.

use chrono::Local;

use calsweep_core::NormalizedEvent;

use crate::error::{CliError, CliResult};

/// Prints events one per line (local time), or as a JSON array.
pub fn print_events(events: &[NormalizedEvent], json: bool) -> CliResult<()> {
    if json {
        let rendered = serde_json::to_string_pretty(events)
            .map_err(|e| CliError::Config(format!("failed to serialize events: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events.");
        return Ok(());
    }

    for event in events {
        println!("{}", format_event_line(event));
    }
    Ok(())
}

/// One event as `start  end  summary` in local time.
fn format_event_line(event: &NormalizedEvent) -> String {
    let start = event.start.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let end = event.end.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let summary = if event.summary.is_empty() {
        "(no title)"
    } else {
        event.summary.as_str()
    };
    format!("{}  {}  {}", start, end, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn line_contains_summary() {
        let event = NormalizedEvent::new(
            "evt-1",
            "Standup",
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
        );
        let line = format_event_line(&event);
        assert!(line.ends_with("Standup"));
    }

    #[test]
    fn empty_summary_gets_placeholder() {
        let event = NormalizedEvent::new(
            "evt-1",
            "",
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
        );
        let line = format_event_line(&event);
        assert!(line.ends_with("(no title)"));
    }
}
