//! Calendar events and event-to-day matching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar event spanning whole days.
///
/// Events are supplied wholesale by the caller at configuration or update
/// time; the widget only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Event {
    /// A single-day event.
    pub fn on_day(summary: impl Into<String>, day: NaiveDate) -> Self {
        Event {
            summary: summary.into(),
            start_date: day,
            end_date: day,
            description: None,
            location: None,
        }
    }

    /// Whether this event marks the given day.
    ///
    /// Only the start and end days count, not the days in between: a
    /// multi-day event shows up as arrival and departure markers.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.start_date == day || self.end_date == day
    }
}

/// Whether any event in the list marks the given day.
pub fn has_event(events: &[Event], day: NaiveDate) -> bool {
    events.iter().any(|event| event.occurs_on(day))
}

/// The events marking a given day, for the detail panel.
pub fn events_on<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events.iter().filter(|event| event.occurs_on(day)).collect()
}
