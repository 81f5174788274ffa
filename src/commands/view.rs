//! Interactive month browser.
//!
//! A raw-mode key loop over the `Calendar` state machine: arrow keys move
//! the day cursor (crossing a month edge navigates), n/p or PageDown/PageUp
//! change month directly, Enter opens the event panel for a day that has
//! one, Esc closes it, q quits.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use crossterm::event::{Event as TermEvent, KeyCode, KeyEventKind, read};
use crossterm::{cursor, execute, terminal};
use monthcal_core::{Calendar, CalendarConfig, events_file};
use owo_colors::OwoColorize;

use crate::render;

pub fn run(events: Option<&Path>, sunday: bool) -> Result<()> {
    let mut config = CalendarConfig::load_default().context("Failed to load configuration")?;
    if sunday {
        config.fixed_start_day = false;
    }

    let events = match events {
        Some(path) => events_file::load_events(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => Vec::new(),
    };

    let today = Local::now().date_naive();
    let mut calendar = Calendar::new(config, events, today)?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut calendar, today, &mut stdout);

    // Restore the terminal even when the loop errored
    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop(calendar: &mut Calendar, today: NaiveDate, out: &mut impl Write) -> Result<()> {
    let mut cursor_day = today;

    loop {
        draw(calendar, cursor_day, out)?;

        let TermEvent::Key(key) = read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Esc => {
                if calendar.selected_day().is_some() {
                    calendar.clear_selection();
                } else {
                    return Ok(());
                }
            }
            KeyCode::Left => move_cursor(calendar, &mut cursor_day, -1),
            KeyCode::Right => move_cursor(calendar, &mut cursor_day, 1),
            KeyCode::Up => move_cursor(calendar, &mut cursor_day, -7),
            KeyCode::Down => move_cursor(calendar, &mut cursor_day, 7),
            KeyCode::Char('p') | KeyCode::PageUp => {
                if calendar.prev_month() {
                    cursor_day = calendar.displayed_month();
                }
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                if calendar.next_month() {
                    cursor_day = calendar.displayed_month();
                }
            }
            KeyCode::Char('t') => {
                if calendar.go_to(today.year(), today.month0()) {
                    cursor_day = today;
                }
            }
            KeyCode::Enter => {
                // Only days flagged with an event open the panel
                calendar.select_day(cursor_day);
            }
            _ => {}
        }
    }
}

/// Move the day cursor, navigating months when it crosses the displayed one.
fn move_cursor(calendar: &mut Calendar, cursor_day: &mut NaiveDate, days: i64) {
    let target = *cursor_day + Duration::days(days);
    let displayed = calendar.displayed_month();
    let same_month = target.year() == displayed.year() && target.month() == displayed.month();

    if same_month || calendar.go_to(target.year(), target.month0()) {
        *cursor_day = target;
    }
}

fn draw(calendar: &Calendar, cursor_day: NaiveDate, out: &mut impl Write) -> Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let view = calendar.month_view();
    let body = render::render_month(&view, true, Some(cursor_day));
    for line in body.lines() {
        write!(out, "{line}\r\n")?;
    }
    write!(out, "\r\n")?;

    if calendar.selected_day().is_some() {
        for event in calendar.selected_events() {
            let span = if event.end_date != event.start_date {
                format!(" ({} → {})", event.start_date, event.end_date)
            } else {
                String::new()
            };
            write!(out, "  {}{}\r\n", event.summary.bold(), span)?;

            if let Some(location) = &event.location {
                write!(out, "    {}\r\n", location.dimmed())?;
            }
            if let Some(description) = &event.description {
                write!(out, "    {description}\r\n")?;
            }
        }
        write!(out, "\r\n{}\r\n", "Esc closes the panel".dimmed())?;
    } else {
        write!(
            out,
            "{}\r\n",
            "arrows move · n/p month · t today · Enter events · q quit".dimmed()
        )?;
    }

    out.flush()?;
    Ok(())
}
