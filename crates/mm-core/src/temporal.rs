//! # Temporal Helpers — Profile Dates
//!
//! Profile documents carry dates as ISO `YYYY-MM-DD` strings (date of
//! birth, graduation date, employment start and end). This module parses
//! them into `chrono::NaiveDate` and provides [`MonthOfYear`] for the
//! month-granularity comparisons the employment rules use.
//!
//! ## Reference Date
//!
//! Nothing here reads the system clock. Rules that compare against "today"
//! receive the reference date as an argument, so the same inputs always
//! produce the same result.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::MmError;

/// The canonical on-the-wire date format.
pub const PROFILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a profile date string.
///
/// Accepts the canonical `YYYY-MM-DD` form. As a lenient fallback, an
/// RFC 3339 timestamp is accepted and truncated to its calendar date in the
/// timestamp's own offset.
///
/// # Errors
///
/// Returns [`MmError::InvalidDate`] if the string is neither form, or names
/// a day that does not exist (e.g. `2023-02-30`).
pub fn parse_profile_date(s: &str) -> Result<NaiveDate, MmError> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, PROFILE_DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|e| MmError::InvalidDate {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Render a date in the canonical `YYYY-MM-DD` form.
pub fn format_profile_date(date: NaiveDate) -> String {
    date.format(PROFILE_DATE_FORMAT).to_string()
}

/// A calendar month, ordered chronologically.
///
/// Two dates in the same month compare equal as `MonthOfYear`, which is
/// what "before, at month granularity" means for employment dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthOfYear {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
}

impl MonthOfYear {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The first day of this month, if the month is valid.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl std::fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_date() {
        let date = parse_profile_date("1985-10-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1985, 10, 14).unwrap());
    }

    #[test]
    fn test_parse_rejects_impossible_day() {
        assert!(parse_profile_date("2023-02-30").is_err());
        assert!(parse_profile_date("2023-13-01").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_profile_date("").is_err());
        assert!(parse_profile_date("not-a-date").is_err());
        assert!(parse_profile_date("14/10/1985").is_err());
    }

    #[test]
    fn test_parse_lenient_timestamp() {
        let date = parse_profile_date("2016-05-01T00:00:00Z").unwrap();
        assert_eq!(format_profile_date(date), "2016-05-01");
    }

    #[test]
    fn test_format_pads_components() {
        let date = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
        assert_eq!(format_profile_date(date), "2001-02-03");
    }

    #[test]
    fn test_month_of_year_ignores_day() {
        let a = MonthOfYear::of(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        let b = MonthOfYear::of(NaiveDate::from_ymd_opt(2020, 3, 31).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_month_of_year_ordering() {
        let dec = MonthOfYear { year: 2019, month: 12 };
        let jan = MonthOfYear { year: 2020, month: 1 };
        assert!(dec < jan);
        assert_eq!(jan.to_string(), "2020-01");
    }

    #[test]
    fn test_first_day_rejects_invalid_month() {
        assert!(MonthOfYear { year: 2020, month: 13 }.first_day().is_none());
        assert_eq!(
            MonthOfYear { year: 2020, month: 2 }.first_day(),
            NaiveDate::from_ymd_opt(2020, 2, 1)
        );
    }
}
