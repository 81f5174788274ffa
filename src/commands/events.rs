use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use monthcal_core::events_file;
use owo_colors::OwoColorize;

pub fn run(file: &Path) -> Result<()> {
    let mut events = events_file::load_events(file)
        .with_context(|| format!("Failed to load events from {}", file.display()))?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Sort by start day
    events.sort_by_key(|event| event.start_date);

    let today = Local::now().date_naive();

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        if current_date != Some(event.start_date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.start_date, today).bold());
            current_date = Some(event.start_date);
        }

        let span = if event.end_date != event.start_date {
            format!(" (until {})", event.end_date.format("%b %-d"))
        } else {
            String::new()
        };

        match &event.location {
            Some(location) => {
                let tag = format!("@ {location}");
                println!("  {}{} {}", event.summary, span, tag.dimmed());
            }
            None => println!("  {}{}", event.summary, span),
        }
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25 2026")
fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}
