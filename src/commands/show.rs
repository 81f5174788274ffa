use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use monthcal_core::{Calendar, CalendarConfig, date, events_file};

use crate::render::Render;

pub fn run(
    month: Option<&str>,
    events: Option<&Path>,
    sunday: bool,
    no_year: bool,
    plain: bool,
) -> Result<()> {
    let mut config = CalendarConfig::load_default().context("Failed to load configuration")?;
    if sunday {
        config.fixed_start_day = false;
    }
    if no_year {
        config.display_year = false;
    }

    let events = match events {
        Some(path) => events_file::load_events(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => Vec::new(),
    };

    let today = Local::now().date_naive();
    let mut calendar = Calendar::new(config, events, today)?;

    if let Some(raw) = month {
        let anchor = date::parse_month(raw)?;
        if !calendar.go_to(anchor.year(), anchor.month0()) {
            anyhow::bail!("Month {} is outside the configured min/max range", raw);
        }
    }

    let view = calendar.month_view();
    if plain {
        print!("{}", view.render_plain());
    } else {
        print!("{}", view.render());
    }

    Ok(())
}
