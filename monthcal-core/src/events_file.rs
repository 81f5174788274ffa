//! Loading event lists from files.
//!
//! The widget takes its events wholesale from the caller; the CLI feeds it
//! from a file, with the format chosen by extension: `.toml` (`[[events]]`
//! tables), `.json` (an array of events) or `.ics` (VEVENT components,
//! truncated to their calendar days).

use std::path::Path;

use chrono::NaiveDate;
use icalendar::DatePerhapsTime;
use icalendar::parser::{read_calendar, unfold};
use serde::Deserialize;

use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;

/// Supported events-file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsFormat {
    Toml,
    Json,
    Ics,
}

impl EventsFormat {
    /// Map a file extension to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(EventsFormat::Toml),
            "json" => Some(EventsFormat::Json),
            "ics" => Some(EventsFormat::Ics),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Event>,
}

/// Load events from a file, dispatching on its extension.
pub fn load_events(path: &Path) -> CalendarResult<Vec<Event>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = EventsFormat::from_extension(extension)
        .ok_or_else(|| CalendarError::UnsupportedEventsFormat(extension.to_string()))?;

    let content = std::fs::read_to_string(path)?;
    parse_events(&content, format)
}

/// Parse an events document in the given format.
pub fn parse_events(content: &str, format: EventsFormat) -> CalendarResult<Vec<Event>> {
    match format {
        EventsFormat::Toml => toml::from_str::<EventsDocument>(content)
            .map(|doc| doc.events)
            .map_err(|e| CalendarError::EventsParse(e.to_string())),
        EventsFormat::Json => serde_json::from_str::<Vec<Event>>(content)
            .map_err(|e| CalendarError::EventsParse(e.to_string())),
        EventsFormat::Ics => parse_ics_events(content),
    }
}

/// Parse the VEVENTs of an ICS calendar into events.
///
/// Only the date parts of DTSTART/DTEND are kept, since day matching has no
/// time component. A DATE-typed DTEND is non-inclusive per RFC 5545 and is
/// pulled back to the event's actual last day. Components without a parsable
/// DTSTART are skipped; a missing DTEND falls back to the start day.
pub fn parse_ics_events(content: &str) -> CalendarResult<Vec<Event>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CalendarError::IcsParse(e.to_string()))?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| {
            let start = vevent
                .find_prop("DTSTART")
                .and_then(|p| DatePerhapsTime::try_from(p).ok())
                .map(to_day)?;
            let end = vevent
                .find_prop("DTEND")
                .and_then(|p| DatePerhapsTime::try_from(p).ok())
                .map(end_day)
                .unwrap_or(start);

            let summary = vevent
                .find_prop("SUMMARY")
                .map(|p| p.val.to_string())
                .unwrap_or_else(|| "(No title)".to_string());
            let description = vevent.find_prop("DESCRIPTION").map(|p| p.val.to_string());
            let location = vevent.find_prop("LOCATION").map(|p| p.val.to_string());

            Some(Event {
                summary,
                start_date: start,
                end_date: end,
                description,
                location,
            })
        })
        .collect();

    Ok(events)
}

/// The calendar day of an ICS date or date-time.
fn to_day(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => dt.date_naive(),
            icalendar::CalendarDateTime::Floating(naive) => naive.date(),
            icalendar::CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}

/// The last day covered by an ICS DTEND.
///
/// A DATE-typed DTEND names the day after the event's last full day, so it
/// comes back by one; a date-time DTEND is an actual end instant and keeps
/// its calendar day.
fn end_day(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d.pred_opt().expect("previous day exists"),
        other => to_day(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_parse_toml_events() {
        let content = r#"
[[events]]
summary = "Trip"
start_date = "2024-03-10"
end_date = "2024-03-12"

[[events]]
summary = "Dentist"
start_date = "2024-03-14"
end_date = "2024-03-14"
location = "Main St"
"#;

        let events = parse_events(content, EventsFormat::Toml).expect("parses");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].summary, "Trip");
        assert_eq!(events[0].start_date, ymd(2024, 3, 10));
        assert_eq!(events[0].end_date, ymd(2024, 3, 12));
        assert_eq!(events[1].location.as_deref(), Some("Main St"));
    }

    #[test]
    fn test_parse_json_events() {
        let content = r#"[
            {"summary": "Trip", "start_date": "2024-03-10", "end_date": "2024-03-12"}
        ]"#;

        let events = parse_events(content, EventsFormat::Json).expect("parses");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_date, ymd(2024, 3, 10));
        assert_eq!(events[0].description, None);
    }

    #[test]
    fn test_parse_malformed_toml_is_an_error() {
        let content = r#"
[[events]]
summary = "No dates"
"#;

        assert!(matches!(
            parse_events(content, EventsFormat::Toml),
            Err(CalendarError::EventsParse(_))
        ));
    }

    #[test]
    fn test_parse_ics_all_day_event() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-123
SUMMARY:Conference
LOCATION:Berlin
DTSTART;VALUE=DATE:20240310
DTEND;VALUE=DATE:20240312
END:VEVENT
END:VCALENDAR"#;

        let events = parse_ics_events(ics).expect("parses");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Conference");
        assert_eq!(events[0].start_date, ymd(2024, 3, 10));
        // A DATE-typed DTEND is non-inclusive: the event's last day is Mar 11
        assert_eq!(events[0].end_date, ymd(2024, 3, 11));
        assert_eq!(events[0].location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_parse_ics_single_day_all_day_event() {
        // A one-day all-day event carries a DTEND one day past its DTSTART
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-124
SUMMARY:Holiday
DTSTART;VALUE=DATE:20240310
DTEND;VALUE=DATE:20240311
END:VEVENT
END:VCALENDAR"#;

        let events = parse_ics_events(ics).expect("parses");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_date, ymd(2024, 3, 10));
        assert_eq!(events[0].end_date, ymd(2024, 3, 10));
    }

    #[test]
    fn test_parse_ics_truncates_datetimes_to_days() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-456
SUMMARY:Standup
DTSTART:20240310T093000Z
DTEND:20240310T094500Z
END:VEVENT
END:VCALENDAR"#;

        let events = parse_ics_events(ics).expect("parses");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_date, ymd(2024, 3, 10));
        assert_eq!(events[0].end_date, ymd(2024, 3, 10));
    }

    #[test]
    fn test_parse_ics_skips_events_without_a_start() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:test-789
SUMMARY:No dates
END:VEVENT
BEGIN:VEVENT
UID:test-790
SUMMARY:Kept
DTSTART;VALUE=DATE:20240401
END:VEVENT
END:VCALENDAR"#;

        let events = parse_ics_events(ics).expect("parses");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Kept");
        // Missing DTEND falls back to the start day
        assert_eq!(events[0].end_date, ymd(2024, 4, 1));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(EventsFormat::from_extension("toml"), Some(EventsFormat::Toml));
        assert_eq!(EventsFormat::from_extension("JSON"), Some(EventsFormat::Json));
        assert_eq!(EventsFormat::from_extension("ics"), Some(EventsFormat::Ics));
        assert_eq!(EventsFormat::from_extension("csv"), None);
    }
}
