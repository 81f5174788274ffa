//! Week-aligned month grids.

use chrono::{Datelike, NaiveDate};

use crate::date::{self, WeekStart};
use crate::event::{self, Event};

/// One day cell of a month grid. Produced fresh on every build; there is no
/// lifecycle beyond a single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub has_event: bool,
}

/// Build the ordered cell list tiling the month that contains `anchor`.
///
/// The grid is padded with leading and trailing days from the adjacent
/// months so that the first cell falls on `week_start` and the last cell
/// closes a week; its length is always a multiple of 7 (28 to 42 cells).
/// Pure: the same inputs always produce the same grid.
pub fn build_grid(
    anchor: NaiveDate,
    week_start: WeekStart,
    today: NaiveDate,
    events: &[Event],
) -> Vec<Cell> {
    let first_cell = date::start_of_week(date::first_of_month(anchor), week_start);
    let last_cell = date::end_of_week(date::last_of_month(anchor), week_start);

    first_cell
        .iter_days()
        .take_while(|day| *day <= last_cell)
        .map(|day| Cell {
            date: day,
            in_current_month: day.month() == anchor.month() && day.year() == anchor.year(),
            is_today: day == today,
            has_event: event::has_event(events, day),
        })
        .collect()
}

/// Chunk a flat cell list into rows of 7 for rendering.
pub fn weeks(cells: &[Cell]) -> Vec<Vec<Cell>> {
    cells.chunks(7).map(|week| week.to_vec()).collect()
}
