//! Terminal rendering for core view types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to monthcal-core types using owo_colors. The core never touches the
//! terminal; it hands out a `MonthView` and this module draws it.

use chrono::{Datelike, NaiveDate};
use monthcal_core::{Cell, MonthView};
use owo_colors::OwoColorize;

/// Width of one day column: a right-aligned day number plus the marker slot.
const CELL_WIDTH: usize = 4;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
    fn render_plain(&self) -> String;
}

impl Render for MonthView {
    fn render(&self) -> String {
        render_month(self, true, None)
    }

    fn render_plain(&self) -> String {
        render_month(self, false, None)
    }
}

/// Render a month view, optionally highlighting a cursor day (used by the
/// interactive view).
pub fn render_month(view: &MonthView, color: bool, cursor: Option<NaiveDate>) -> String {
    let mut lines = Vec::new();

    let header = if color {
        view.header.bold().to_string()
    } else {
        view.header.clone()
    };
    lines.push(header);

    let labels: String = view
        .weekday_labels
        .iter()
        .map(|label| format!("{:>width$}", label, width = CELL_WIDTH))
        .collect();
    lines.push(if color { labels.dimmed().to_string() } else { labels });

    for week in &view.weeks {
        let row: String = week
            .iter()
            .map(|cell| render_cell(cell, color, cursor == Some(cell.date)))
            .collect();
        lines.push(row);
    }

    lines.join("\n") + "\n"
}

/// One fixed-width cell: the day number plus an event marker.
fn render_cell(cell: &Cell, color: bool, is_cursor: bool) -> String {
    let marker = if cell.has_event { "*" } else { " " };
    let text = format!("{:>3}{}", cell.date.day(), marker);

    if !color {
        return text;
    }

    if is_cursor {
        text.reversed().to_string()
    } else if cell.is_today {
        text.yellow().bold().to_string()
    } else if !cell.in_current_month {
        text.dimmed().to_string()
    } else if cell.has_event {
        text.green().to_string()
    } else {
        text
    }
}
