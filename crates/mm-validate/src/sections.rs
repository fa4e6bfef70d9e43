//! # Section Validators
//!
//! One validator per profile-editing tab. Each runs the field-presence
//! checker over the section's required fields and then layers that
//! section's extra rules on top.
//!
//! ## Employment End-Date Rules
//!
//! Three rules may set `work_history[i].end_date`. They run in this order
//! and the last one that applies wins:
//!
//! 1. end date present and before the start date (month granularity);
//! 2. end date absent but the month/year edit buffer is not blank;
//! 3. end date present and after the reference month.
//!
//! Rules 1 and 3 need both dates to parse; an unparseable date does not
//! trigger them.

use chrono::NaiveDate;
use serde_json::Value;

use mm_core::{parse_profile_date, MonthOfYear, Profile};

use crate::messages::{
    EDUCATION_LABELS, EMPLOYMENT_LABELS, END_DATE_BEFORE_START, END_DATE_INCOMPLETE,
    END_DATE_IN_FUTURE, INVALID_BIRTH_DATE, PERSONAL_LABELS, PRIVACY_LABELS,
};
use crate::presence::check_field_presence;
use crate::tree::{FieldPath, ValidationErrors};

const EDUCATION: &str = "education";
const WORK_HISTORY: &str = "work_history";

/// Validate the personal-information tab.
///
/// Every field in [`PERSONAL_LABELS`] is required. The date of birth must
/// also parse and fall strictly before `today`; when it does not, the
/// invalid-birth-date message replaces any presence message for it.
pub fn personal_validation(profile: &Profile, today: NaiveDate) -> ValidationErrors {
    let required: Vec<FieldPath> = PERSONAL_LABELS
        .iter()
        .map(|(key, _)| FieldPath::field(*key))
        .collect();
    let mut errors = check_field_presence(&document_of(profile), &required, PERSONAL_LABELS);

    let born_before_today = profile.birth_date().is_some_and(|dob| dob < today);
    if !born_before_today {
        errors.insert("date_of_birth", INVALID_BIRTH_DATE);
    }
    errors
}

/// Validate the education tab.
///
/// No entries means no errors. Every entry needs every field in
/// [`EDUCATION_LABELS`], except that high-school entries need no field of
/// study.
pub fn education_validation(profile: &Profile) -> ValidationErrors {
    if profile.education.is_empty() {
        return ValidationErrors::new();
    }
    let required: Vec<FieldPath> = profile
        .education
        .iter()
        .enumerate()
        .flat_map(|(index, entry)| {
            let skip_field_of_study = entry
                .degree_name
                .is_some_and(|level| !level.has_field_of_study());
            EDUCATION_LABELS
                .iter()
                .filter(move |(key, _)| !(skip_field_of_study && *key == "field_of_study"))
                .map(move |(key, _)| FieldPath::entry(EDUCATION, index, *key))
        })
        .collect();
    check_field_presence(&document_of(profile), &required, EDUCATION_LABELS)
}

/// Validate the employment tab.
///
/// No entries means no errors. Every entry needs every field in
/// [`EMPLOYMENT_LABELS`]; the end-date rules in the module docs are then
/// applied relative to `today`.
pub fn employment_validation(profile: &Profile, today: NaiveDate) -> ValidationErrors {
    if profile.work_history.is_empty() {
        return ValidationErrors::new();
    }
    let required: Vec<FieldPath> = (0..profile.work_history.len())
        .flat_map(|index| {
            EMPLOYMENT_LABELS
                .iter()
                .map(move |(key, _)| FieldPath::entry(WORK_HISTORY, index, *key))
        })
        .collect();
    let mut errors = check_field_presence(&document_of(profile), &required, EMPLOYMENT_LABELS);

    let this_month = MonthOfYear::of(today);
    for (index, entry) in profile.work_history.iter().enumerate() {
        let path = FieldPath::entry(WORK_HISTORY, index, "end_date");
        let start = entry.start_date.as_deref().and_then(parse_date_or_warn);
        let end = entry
            .end_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .and_then(parse_date_or_warn);

        if let (Some(start), Some(end)) = (start, end) {
            if MonthOfYear::of(end) < MonthOfYear::of(start) {
                errors.set(&path, END_DATE_BEFORE_START);
            }
        }

        let edit_pending = entry
            .end_date_edit
            .as_ref()
            .is_some_and(|edit| !edit.is_blank());
        if entry.is_current() && edit_pending {
            errors.set(&path, END_DATE_INCOMPLETE);
        }

        if let Some(end) = end {
            if MonthOfYear::of(end) > this_month {
                errors.set(&path, END_DATE_IN_FUTURE);
            }
        }
    }
    errors
}

/// Validate the privacy tab: an account privacy level must be chosen.
pub fn privacy_validation(profile: &Profile) -> ValidationErrors {
    check_field_presence(
        &document_of(profile),
        &[FieldPath::field("account_privacy")],
        PRIVACY_LABELS,
    )
}

/// The JSON document the presence checker walks.
///
/// Serializing a `Profile` does not fail in practice; if it ever does, the
/// null document makes every required field report as missing.
fn document_of(profile: &Profile) -> Value {
    profile.to_document().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "profile could not be serialized for validation");
        Value::Null
    })
}

fn parse_date_or_warn(s: &str) -> Option<NaiveDate> {
    match parse_profile_date(s) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparseable profile date");
            None
        }
    }
}
