//! # Date Input
//!
//! Day, month, and year are typed into separate inputs one character at a
//! time. Each fragment is sanitized as it arrives and clamped into range so
//! an overshoot (month `13`, year `2300`) pins to the boundary instead of
//! blanking the field.
//!
//! [`DateField`] tracks one date input through three states:
//!
//! ```text
//!            input             all fragments compose
//!   Empty ──────────► PartialEdit ─────────────────► Committed(date)
//!     ▲                   ▲  │                           │
//!     │                   │  └───────── input ───────────┘ (recomposed)
//!     └── all fragments cleared
//! ```
//!
//! A committed field writes back the canonical `YYYY-MM-DD` form.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use mm_core::{format_profile_date, MonthYearEdit};

// ─── Fragment sanitization ──────────────────────────────────────────

/// Reduce typed text to at most `length` digits.
///
/// Non-digits are dropped. Leading zeros are trimmed only while the digits
/// overflow `length`, so a partial `"09"` keeps its zero; the result is then
/// truncated to `length`.
pub fn sanitize_date(input: &str, length: usize) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let mut trimmed = digits.as_str();
    while trimmed.len() > length && trimmed.starts_with('0') {
        trimmed = &trimmed[1..];
    }
    trimmed.chars().take(length).collect()
}

/// One of the three inputs of a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateComponent {
    Day,
    Month,
    Year,
}

impl DateComponent {
    /// Digits the input accepts.
    pub fn length(&self) -> usize {
        match self {
            Self::Day | Self::Month => 2,
            Self::Year => 4,
        }
    }

    /// Accepted values.
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            Self::Day => 1..=31,
            Self::Month => 1..=12,
            Self::Year => 1800..=2100,
        }
    }

    /// Sanitize `input` and clamp it into [`range`](Self::range).
    ///
    /// Returns `None` when no digits remain. Values above the range clamp
    /// down immediately. Values below it clamp up only once every digit has
    /// been typed, since `"2"` is a prefix of a valid year.
    pub fn validate(&self, input: &str) -> Option<u32> {
        let sanitized = sanitize_date(input, self.length());
        let value: u32 = sanitized.parse().ok()?;
        let range = self.range();
        if value > *range.end() {
            Some(*range.end())
        } else if value < *range.start() && sanitized.len() == self.length() {
            Some(*range.start())
        } else {
            Some(value)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_day(input: &str) -> Option<u32> {
    DateComponent::Day.validate(input)
}

pub fn validate_month(input: &str) -> Option<u32> {
    DateComponent::Month.validate(input)
}

pub fn validate_year(input: &str) -> Option<u32> {
    DateComponent::Year.validate(input)
}

/// Assemble a calendar date. Every component must be present and in range
/// and the date itself must exist (no February 30th).
pub fn compose_date(day: Option<u32>, month: Option<u32>, year: Option<u32>) -> Option<NaiveDate> {
    let (day, month, year) = (day?, month?, year?);
    let in_range = DateComponent::Day.range().contains(&day)
        && DateComponent::Month.range().contains(&month)
        && DateComponent::Year.range().contains(&year);
    if !in_range {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Commit a work-history month/year edit buffer to the first day of that
/// month, once both parts compose.
pub fn commit_month_year(edit: &MonthYearEdit) -> Option<NaiveDate> {
    compose_date(Some(1), validate_month(&edit.month), validate_year(&edit.year))
}

// ─── Date field ─────────────────────────────────────────────────────

/// Whether a field has a day input or only month and year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePrecision {
    #[default]
    Day,
    /// Day is fixed to the first of the month.
    Month,
}

/// The text currently in each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEdit {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

impl DateEdit {
    pub fn is_blank(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    fn fragment_mut(&mut self, component: DateComponent) -> &mut String {
        match component {
            DateComponent::Day => &mut self.day,
            DateComponent::Month => &mut self.month,
            DateComponent::Year => &mut self.year,
        }
    }
}

/// Where a date field is in its edit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "date", rename_all = "snake_case")]
pub enum DateFieldState {
    Empty,
    PartialEdit,
    Committed(NaiveDate),
}

impl DateFieldState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PartialEdit => "partial_edit",
            Self::Committed(_) => "committed",
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Committed(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for DateFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A three-input date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateField {
    precision: DatePrecision,
    edit: DateEdit,
    state: DateFieldState,
}

impl DateField {
    /// An empty field.
    pub fn new(precision: DatePrecision) -> Self {
        Self {
            precision,
            edit: DateEdit::default(),
            state: DateFieldState::Empty,
        }
    }

    /// A field showing a stored date.
    pub fn from_date(date: NaiveDate, precision: DatePrecision) -> Self {
        let date = match precision {
            DatePrecision::Day => date,
            DatePrecision::Month => date.with_day(1).unwrap_or(date),
        };
        let day = match precision {
            DatePrecision::Day => format!("{:02}", date.day()),
            DatePrecision::Month => String::new(),
        };
        Self {
            precision,
            edit: DateEdit {
                day,
                month: format!("{:02}", date.month()),
                year: format!("{:04}", date.year()),
            },
            state: DateFieldState::Committed(date),
        }
    }

    pub fn state(&self) -> DateFieldState {
        self.state
    }

    pub fn edit(&self) -> &DateEdit {
        &self.edit
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Canonical `YYYY-MM-DD` of the committed date.
    pub fn formatted(&self) -> Option<String> {
        self.state.date().map(format_profile_date)
    }

    /// Replace one input's text and recompute the state.
    ///
    /// The text is sanitized; a value that overshoots its range is replaced
    /// by the clamped value. Input to the day of a month-precision field is
    /// ignored.
    pub fn input(&mut self, component: DateComponent, text: &str) -> DateFieldState {
        if self.precision == DatePrecision::Month && component == DateComponent::Day {
            return self.state;
        }
        let sanitized = sanitize_date(text, component.length());
        let fragment = match (component.validate(&sanitized), sanitized.parse::<u32>()) {
            (Some(clamped), Ok(typed)) if clamped != typed => {
                format!("{:0width$}", clamped, width = component.length())
            }
            _ => sanitized,
        };
        *self.edit.fragment_mut(component) = fragment;

        let next = self.recompute();
        if next != self.state {
            tracing::trace!(
                from = %self.state,
                to = %next,
                component = %component,
                "date field transition"
            );
        }
        self.state = next;
        next
    }

    fn recompute(&self) -> DateFieldState {
        if self.edit.is_blank() {
            return DateFieldState::Empty;
        }
        let day = match self.precision {
            DatePrecision::Day => validate_day(&self.edit.day),
            DatePrecision::Month => Some(1),
        };
        match compose_date(day, validate_month(&self.edit.month), validate_year(&self.edit.year)) {
            Some(date) => DateFieldState::Committed(date),
            None => DateFieldState::PartialEdit,
        }
    }
}

impl Default for DateField {
    fn default() -> Self {
        Self::new(DatePrecision::Day)
    }
}
