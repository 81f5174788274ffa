//! Navigation state and render-ready month views.
//!
//! [`Calendar`] owns the one piece of mutable state in the widget: the
//! displayed month (plus the day selection for the event panel). Everything
//! it hands out is a plain value, so hosts can rebuild their UI from a
//! [`MonthView`] after every transition.

use chrono::{Datelike, NaiveDate};

use crate::config::CalendarConfig;
use crate::date::{self, WeekStart};
use crate::error::CalendarResult;
use crate::event::{self, Event};
use crate::grid::{self, Cell};

/// Callback invoked after every successful month transition with the
/// zero-based month and the year of the newly displayed month.
pub type MonthChangeCallback = Box<dyn FnMut(u32, i32)>;

/// A complete, render-ready description of one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// Month name, optionally suffixed with the year.
    pub header: String,
    /// Three-letter weekday labels, first column first.
    pub weekday_labels: Vec<String>,
    /// Grid rows of exactly 7 cells each.
    pub weeks: Vec<Vec<Cell>>,
}

/// The month-view widget state machine.
///
/// Synchronous and single-threaded: every operation runs to completion
/// before the next input is processed.
pub struct Calendar {
    config: CalendarConfig,
    events: Vec<Event>,
    /// Always the first day of the displayed month.
    displayed_month: NaiveDate,
    /// Captured once at construction.
    today: NaiveDate,
    selected_day: Option<NaiveDate>,
    on_month_change: Option<MonthChangeCallback>,
}

impl Calendar {
    /// Create a widget showing the month containing `today`.
    ///
    /// Validates the configuration at the boundary; a malformed name list or
    /// an inverted min/max range is an error rather than a broken grid.
    pub fn new(config: CalendarConfig, events: Vec<Event>, today: NaiveDate) -> CalendarResult<Self> {
        config.validate()?;

        Ok(Calendar {
            displayed_month: date::first_of_month(today),
            config,
            events,
            today,
            selected_day: None,
            on_month_change: None,
        })
    }

    /// Register the month-change hook. Invoked once per successful
    /// transition, never for a rejected one.
    pub fn set_on_month_change(&mut self, callback: MonthChangeCallback) {
        self.on_month_change = Some(callback);
    }

    /// First day of the displayed month.
    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replace the event list wholesale.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Advance to the next month. Returns `false` (and changes nothing)
    /// when the target month lies outside the configured bounds.
    pub fn next_month(&mut self) -> bool {
        self.transition_to(date::shift_months(self.displayed_month, 1))
    }

    /// Go back one month; same bounds behavior as [`Calendar::next_month`].
    pub fn prev_month(&mut self) -> bool {
        self.transition_to(date::shift_months(self.displayed_month, -1))
    }

    /// Jump to an arbitrary month (zero-based), subject to the same bounds.
    pub fn go_to(&mut self, year: i32, month0: u32) -> bool {
        self.transition_to(date::normalized_ymd(year, month0 as i32, 1))
    }

    fn transition_to(&mut self, first: NaiveDate) -> bool {
        if !self.month_in_bounds(first) {
            return false;
        }

        self.displayed_month = first;
        self.selected_day = None;

        if let Some(callback) = self.on_month_change.as_mut() {
            callback(first.month0(), first.year());
        }
        true
    }

    /// A month is navigable when it overlaps the configured min/max range.
    fn month_in_bounds(&self, first: NaiveDate) -> bool {
        if let Some(min) = self.config.min_date
            && date::last_of_month(first) < min
        {
            return false;
        }
        if let Some(max) = self.config.max_date
            && first > max
        {
            return false;
        }
        true
    }

    /// Header text: the month name, suffixed with the year when configured.
    pub fn header_text(&self) -> String {
        let name = &self.config.month_names[self.displayed_month.month0() as usize];

        if self.config.display_year {
            format!("{} {}", name, self.displayed_month.year())
        } else {
            name.clone()
        }
    }

    /// Three-letter weekday labels, rotated to the active week start.
    pub fn weekday_labels(&self) -> Vec<String> {
        let offset = match self.config.week_start() {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        };

        (0..7)
            .map(|i| {
                let name = &self.config.day_names[(i + offset) % 7];
                name.chars().take(3).collect()
            })
            .collect()
    }

    /// The flat cell list for the displayed month.
    pub fn grid(&self) -> Vec<Cell> {
        let events: &[Event] = if self.config.display_event {
            &self.events
        } else {
            &[]
        };

        grid::build_grid(self.displayed_month, self.config.week_start(), self.today, events)
    }

    /// The complete render-ready view of the displayed month.
    pub fn month_view(&self) -> MonthView {
        MonthView {
            header: self.header_text(),
            weekday_labels: self.weekday_labels(),
            weeks: grid::weeks(&self.grid()),
        }
    }

    /// Select a day for the event-detail panel. Only days that carry an
    /// event are selectable; selecting anything else returns `false`.
    pub fn select_day(&mut self, day: NaiveDate) -> bool {
        if self.config.display_event && event::has_event(&self.events, day) {
            self.selected_day = Some(day);
            true
        } else {
            false
        }
    }

    /// Hide the event-detail panel.
    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }

    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    /// Events on the selected day, for the detail panel.
    pub fn selected_events(&self) -> Vec<&Event> {
        match self.selected_day {
            Some(day) => event::events_on(&self.events, day),
            None => Vec::new(),
        }
    }
}
