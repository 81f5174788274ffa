//! Calendar-day arithmetic.
//!
//! Every operation here takes and returns `chrono::NaiveDate` values; nothing
//! mutates a date in place. Week boundaries are found by walking one day at a
//! time (bounded by 6 steps), which stays correct across month and year edges
//! without any modular bookkeeping.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Which weekday anchors the first column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    /// The weekday that opens a week.
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// The weekday that closes a week (immediately preceding the start).
    pub fn last_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sat,
            WeekStart::Monday => Weekday::Sun,
        }
    }
}

/// Build a date from a year, zero-based month and day-of-month, normalizing
/// out-of-range components by overflow: month 12 rolls into January of the
/// next year, day 0 is the last day of the previous month, and Feb 30 rolls
/// into early March.
///
/// The month is zero-based (January = 0) so month numbers index directly
/// into a month-name list.
pub fn normalized_ymd(year: i32, month0: i32, day: i32) -> NaiveDate {
    let months = i64::from(year) * 12 + i64::from(month0);
    let y = months.div_euclid(12) as i32;
    let m = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(y, m, 1).expect("normalized month within supported range");
    first + Duration::days(i64::from(day) - 1)
}

/// Shift a date by whole months, clamping the day-of-month to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(delta);
    let year = months.div_euclid(12) as i32;
    let month0 = months.rem_euclid(12) as i32;
    let day = date.day().min(days_in_month(year, month0));
    normalized_ymd(year, month0, day as i32)
}

/// Number of days in a month (zero-based month).
pub fn days_in_month(year: i32, month0: i32) -> u32 {
    // Day 0 of the following month is the last day of this one.
    normalized_ymd(year, month0 + 1, 0).day()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    normalized_ymd(date.year(), date.month0() as i32, 1)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    normalized_ymd(date.year(), date.month0() as i32 + 1, 0)
}

/// Walk backward from `date` to the nearest week boundary.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let mut day = date;
    while day.weekday() != week_start.first_weekday() {
        day = day.pred_opt().expect("previous day exists");
    }
    day
}

/// Walk forward from `date` to the day that closes its week.
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let mut day = date;
    while day.weekday() != week_start.last_weekday() {
        day = day.succ_opt().expect("next day exists");
    }
    day
}

/// Parse a `YYYY-MM` month designator into the first day of that month.
pub fn parse_month(s: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidMonth(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_normalized_feb_30_rolls_into_march() {
        // 2023 is not a leap year: Feb 30 lands two days into March
        assert_eq!(normalized_ymd(2023, 1, 30), ymd(2023, 3, 2));
        // 2024 is: only one day of overflow
        assert_eq!(normalized_ymd(2024, 1, 30), ymd(2024, 3, 1));
    }

    #[test]
    fn test_normalized_month_overflow_rolls_year() {
        assert_eq!(normalized_ymd(2023, 12, 1), ymd(2024, 1, 1));
        assert_eq!(normalized_ymd(2024, -1, 1), ymd(2023, 12, 1));
    }

    #[test]
    fn test_normalized_day_zero_is_last_of_previous_month() {
        assert_eq!(normalized_ymd(2024, 2, 0), ymd(2024, 2, 29));
        assert_eq!(normalized_ymd(2024, 0, 0), ymd(2023, 12, 31));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2023, 1, 31), 1), ymd(2023, 2, 28));
    }

    #[test]
    fn test_shift_months_crosses_year_boundary() {
        assert_eq!(shift_months(ymd(2023, 12, 1), 1), ymd(2024, 1, 1));
        assert_eq!(shift_months(ymd(2024, 1, 1), -1), ymd(2023, 12, 1));
    }

    #[test]
    fn test_week_boundaries_around_february_2024() {
        // Feb 1, 2024 is a Thursday
        assert_eq!(start_of_week(ymd(2024, 2, 1), WeekStart::Monday), ymd(2024, 1, 29));
        assert_eq!(start_of_week(ymd(2024, 2, 1), WeekStart::Sunday), ymd(2024, 1, 28));
        // Feb 29, 2024 is also a Thursday
        assert_eq!(end_of_week(ymd(2024, 2, 29), WeekStart::Monday), ymd(2024, 3, 3));
        assert_eq!(end_of_week(ymd(2024, 2, 29), WeekStart::Sunday), ymd(2024, 3, 2));
    }

    #[test]
    fn test_week_boundary_walk_is_identity_on_boundary() {
        // Jan 29, 2024 is a Monday
        assert_eq!(start_of_week(ymd(2024, 1, 29), WeekStart::Monday), ymd(2024, 1, 29));
        // Mar 3, 2024 is a Sunday
        assert_eq!(end_of_week(ymd(2024, 3, 3), WeekStart::Monday), ymd(2024, 3, 3));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 11), 31);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-02").expect("valid month"), ymd(2024, 2, 1));
        assert!(matches!(parse_month("2024-13"), Err(CalendarError::InvalidMonth(_))));
        assert!(matches!(parse_month("February"), Err(CalendarError::InvalidMonth(_))));
    }
}
