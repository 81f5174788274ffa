//! Error types for monthcal.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when configuring or feeding the widget.
///
/// Grid and date arithmetic itself is total: every representable date
/// produces a valid grid, so errors only arise at the configuration and
/// file-loading boundary.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Expected 12 month names, got {0}")]
    MonthNames(usize),

    #[error("Expected 7 day names (Sunday first), got {0}")]
    DayNames(usize),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("min_date {min} is after max_date {max}")]
    InvertedRange { min: NaiveDate, max: NaiveDate },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported events file format: {0}")]
    UnsupportedEventsFormat(String),

    #[error("Failed to parse events: {0}")]
    EventsParse(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for monthcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
