//! # Whole-Profile Completeness
//!
//! Runs the section validators in tab order and stops at the first section
//! with errors. The failing [`ProfileStep`] tells the caller which tab to
//! send the learner back to.
//!
//! Order: personal, employment (only when work history has entries),
//! education (only when education has entries), privacy.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mm_core::{MmError, Profile};

use crate::sections::{
    education_validation, employment_validation, personal_validation, privacy_validation,
};
use crate::tree::ValidationErrors;

/// A profile-editing tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProfileStep {
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "professional")]
    Employment,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "privacy")]
    Privacy,
}

impl ProfileStep {
    /// All steps in the order the completeness check visits them.
    pub fn all_steps() -> &'static [ProfileStep] {
        &[
            Self::Personal,
            Self::Employment,
            Self::Education,
            Self::Privacy,
        ]
    }

    /// The route identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Employment => "professional",
            Self::Education => "education",
            Self::Privacy => "privacy",
        }
    }
}

impl fmt::Display for ProfileStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStep {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_steps()
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| MmError::UnknownCode {
                kind: "profile step",
                value: s.to_string(),
            })
    }
}

/// Outcome of [`validate_profile_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    Incomplete {
        step: ProfileStep,
        errors: ValidationErrors,
    },
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The first failing step, if any.
    pub fn step(&self) -> Option<ProfileStep> {
        match self {
            Self::Complete => None,
            Self::Incomplete { step, .. } => Some(*step),
        }
    }

    /// The failing step's errors; empty when complete.
    pub fn errors(&self) -> ValidationErrors {
        match self {
            Self::Complete => ValidationErrors::new(),
            Self::Incomplete { errors, .. } => errors.clone(),
        }
    }

    /// The `(complete, step, errors)` triple.
    pub fn into_parts(self) -> (bool, Option<ProfileStep>, ValidationErrors) {
        match self {
            Self::Complete => (true, None, ValidationErrors::new()),
            Self::Incomplete { step, errors } => (false, Some(step), errors),
        }
    }

    /// Serializable form of the triple.
    pub fn report(self) -> CompletenessReport {
        let (complete, step, errors) = self.into_parts();
        CompletenessReport {
            complete,
            step,
            errors,
        }
    }
}

/// `{ "complete": bool, "step": "personal" | ... | null, "errors": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub complete: bool,
    pub step: Option<ProfileStep>,
    pub errors: ValidationErrors,
}

/// Find the first profile step with validation errors.
pub fn validate_profile_complete(profile: &Profile, today: NaiveDate) -> Completeness {
    let errors = personal_validation(profile, today);
    if !errors.is_empty() {
        return incomplete(ProfileStep::Personal, errors);
    }
    if !profile.work_history.is_empty() {
        let errors = employment_validation(profile, today);
        if !errors.is_empty() {
            return incomplete(ProfileStep::Employment, errors);
        }
    }
    if !profile.education.is_empty() {
        let errors = education_validation(profile);
        if !errors.is_empty() {
            return incomplete(ProfileStep::Education, errors);
        }
    }
    let errors = privacy_validation(profile);
    if !errors.is_empty() {
        return incomplete(ProfileStep::Privacy, errors);
    }
    tracing::debug!("profile complete");
    Completeness::Complete
}

fn incomplete(step: ProfileStep, errors: ValidationErrors) -> Completeness {
    tracing::debug!(
        step = %step,
        messages = errors.message_count(),
        "profile incomplete"
    );
    Completeness::Incomplete { step, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::{AccountPrivacy, DegreeLevel, EducationEntry, WorkHistoryEntry};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn complete_profile() -> Profile {
        Profile {
            first_name: text("Jane"),
            last_name: text("Doe"),
            preferred_name: text("JD"),
            gender: text("f"),
            preferred_language: text("en"),
            city: text("Boston"),
            state_or_territory: text("US-MA"),
            country: text("US"),
            birth_city: text("Lisbon"),
            birth_state_or_territory: text("PT-11"),
            birth_country: text("PT"),
            date_of_birth: text("1990-01-31"),
            account_privacy: Some(AccountPrivacy::Public),
            ..Profile::default()
        }
    }

    #[test]
    fn test_complete_profile() {
        let outcome = validate_profile_complete(&complete_profile(), today());
        assert!(outcome.is_complete());
        assert_eq!(outcome.into_parts(), (true, None, ValidationErrors::new()));
    }

    #[test]
    fn test_empty_profile_stops_at_personal() {
        let (complete, step, errors) =
            validate_profile_complete(&Profile::default(), today()).into_parts();
        assert!(!complete);
        assert_eq!(step, Some(ProfileStep::Personal));
        assert_eq!(errors.message_count(), 12);
        assert!(errors.message("account_privacy").is_none());
    }

    #[test]
    fn test_employment_checked_before_education() {
        let profile = Profile {
            work_history: vec![WorkHistoryEntry::new_blank()],
            education: vec![EducationEntry::new_for_level(DegreeLevel::Masters)],
            ..complete_profile()
        };
        let outcome = validate_profile_complete(&profile, today());
        assert_eq!(outcome.step(), Some(ProfileStep::Employment));
        assert!(outcome.errors().entry("work_history", 0).is_some());
    }

    #[test]
    fn test_education_step() {
        let profile = Profile {
            education: vec![EducationEntry::new_for_level(DegreeLevel::Masters)],
            ..complete_profile()
        };
        let outcome = validate_profile_complete(&profile, today());
        assert_eq!(outcome.step(), Some(ProfileStep::Education));
    }

    #[test]
    fn test_privacy_checked_last() {
        let profile = Profile {
            account_privacy: None,
            ..complete_profile()
        };
        let outcome = validate_profile_complete(&profile, today());
        assert_eq!(outcome.step(), Some(ProfileStep::Privacy));
        assert_eq!(
            outcome.errors().message("account_privacy"),
            Some("Privacy level is required")
        );
    }

    #[test]
    fn test_report_serialization() {
        let report = validate_profile_complete(&complete_profile(), today()).report();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"complete": true, "step": null, "errors": {}})
        );
        let report = validate_profile_complete(
            &Profile {
                account_privacy: None,
                ..complete_profile()
            },
            today(),
        )
        .report();
        assert_eq!(serde_json::to_value(&report).unwrap()["step"], "privacy");
    }

    #[test]
    fn test_step_round_trip_and_unknown() {
        for step in ProfileStep::all_steps() {
            assert_eq!(step.as_str().parse::<ProfileStep>().unwrap(), *step);
        }
        assert!("employment".parse::<ProfileStep>().is_err());
    }
}
