//! Widget configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::WeekStart;
use crate::error::{CalendarError, CalendarResult};

/// Configuration for a month-view calendar.
///
/// Every field has a default, so an empty config file (or
/// `CalendarConfig::default()`) yields a working widget. Dates in TOML must
/// be quoted strings in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Month names, January first. Must hold exactly 12 entries.
    pub month_names: Vec<String>,

    /// Day names, Sunday first. Must hold exactly 7 entries.
    pub day_names: Vec<String>,

    /// Earliest day the widget will navigate to.
    pub min_date: Option<NaiveDate>,

    /// Latest day the widget will navigate to.
    pub max_date: Option<NaiveDate>,

    /// Append the year to the header text.
    pub display_year: bool,

    /// Pin the week start to Monday; weeks start on Sunday otherwise.
    pub fixed_start_day: bool,

    /// Mark days that carry events.
    pub display_event: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from)
            .to_vec(),
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from)
            .to_vec(),
            min_date: None,
            max_date: None,
            display_year: true,
            fixed_start_day: true,
            display_event: true,
        }
    }
}

impl CalendarConfig {
    /// The week-start convention implied by `fixed_start_day`.
    pub fn week_start(&self) -> WeekStart {
        if self.fixed_start_day {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        }
    }

    /// Reject malformed name lists and inverted date bounds.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.month_names.len() != 12 {
            return Err(CalendarError::MonthNames(self.month_names.len()));
        }
        if self.day_names.len() != 7 {
            return Err(CalendarError::DayNames(self.day_names.len()));
        }
        if let (Some(min), Some(max)) = (self.min_date, self.max_date)
            && min > max
        {
            return Err(CalendarError::InvertedRange { min, max });
        }
        Ok(())
    }

    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> CalendarResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: CalendarConfig =
            toml::from_str(&content).map_err(|e| CalendarError::Config(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// The default config file location (~/.config/monthcal/config.toml).
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("monthcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> CalendarResult<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CalendarConfig::default();

        config.validate().expect("defaults validate");
        assert_eq!(config.week_start(), WeekStart::Monday);
        assert!(config.display_year);
        assert!(config.display_event);
    }

    #[test]
    fn test_week_start_follows_fixed_start_day() {
        let config = CalendarConfig {
            fixed_start_day: false,
            ..Default::default()
        };

        assert_eq!(config.week_start(), WeekStart::Sunday);
    }

    #[test]
    fn test_wrong_length_name_lists_are_rejected() {
        let config = CalendarConfig {
            month_names: vec!["January".to_string(); 11],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CalendarError::MonthNames(11))));

        let config = CalendarConfig {
            day_names: vec!["Sunday".to_string(); 6],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CalendarError::DayNames(6))));
    }

    #[test]
    fn test_inverted_date_range_is_rejected() {
        let config = CalendarConfig {
            min_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            max_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(CalendarError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_config_parses_from_toml() {
        let content = r#"
display_year = false
fixed_start_day = false
min_date = "2024-01-01"
max_date = "2024-12-31"
"#;

        let config: CalendarConfig = toml::from_str(content).expect("parses");
        config.validate().expect("validates");

        assert!(!config.display_year);
        assert_eq!(config.week_start(), WeekStart::Sunday);
        assert_eq!(config.min_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(config.max_date, NaiveDate::from_ymd_opt(2024, 12, 31));
        // Untouched fields keep their defaults
        assert_eq!(config.month_names.len(), 12);
    }
}
