//! # Validator Composition
//!
//! Every validator has the same call shape: `(&Profile, &UiState)` in,
//! [`ValidationErrors`] out. Validators that only look at the profile ignore
//! the UI state; validators that compare dates capture their reference date
//! when constructed.
//!
//! [`combine_validators`] runs a list of validators in order and merges
//! their results with [`ValidationErrors::merge`], so later validators win
//! on a colliding leaf while errors for different entries from different
//! validators coexist.

use std::fmt;

use chrono::NaiveDate;

use mm_core::{Profile, UiState};

use crate::sections::{
    education_validation, employment_validation, personal_validation, privacy_validation,
};
use crate::tree::ValidationErrors;
use crate::ui::{education_ui_validation, employment_ui_validation, program_validation};

/// A pure check over a profile and the UI state around it.
pub trait Validator: Send + Sync {
    /// Compute the errors for `profile` under `ui`.
    fn validate(&self, profile: &Profile, ui: &UiState) -> ValidationErrors;
}

impl<F> Validator for F
where
    F: Fn(&Profile, &UiState) -> ValidationErrors + Send + Sync,
{
    fn validate(&self, profile: &Profile, ui: &UiState) -> ValidationErrors {
        self(profile, ui)
    }
}

/// Several validators run as one. See [`combine_validators`].
#[derive(Default)]
pub struct CombinedValidator {
    validators: Vec<Box<dyn Validator>>,
}

impl fmt::Debug for CombinedValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedValidator")
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl CombinedValidator {
    /// An empty combination. Validates everything as valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator. It runs after, and wins collisions against, the
    /// ones already added.
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Number of validators combined.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True when no validators have been added.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for CombinedValidator {
    fn validate(&self, profile: &Profile, ui: &UiState) -> ValidationErrors {
        let merged = self
            .validators
            .iter()
            .fold(ValidationErrors::new(), |acc, v| acc.merge(v.validate(profile, ui)));
        tracing::trace!(
            validators = self.validators.len(),
            messages = merged.message_count(),
            "combined validation finished"
        );
        merged
    }
}

/// Combine `validators` into one that runs each in order and deep-merges
/// the results.
pub fn combine_validators(validators: Vec<Box<dyn Validator>>) -> CombinedValidator {
    CombinedValidator { validators }
}

// ─── Section validators with the common call shape ──────────────────

/// The personal-information validator, comparing against `today`.
pub fn personal(today: NaiveDate) -> impl Validator {
    move |profile: &Profile, _: &UiState| personal_validation(profile, today)
}

/// The education validator.
pub fn education() -> impl Validator {
    |profile: &Profile, _: &UiState| education_validation(profile)
}

/// The employment validator, comparing against `today`.
pub fn employment(today: NaiveDate) -> impl Validator {
    move |profile: &Profile, _: &UiState| employment_validation(profile, today)
}

/// The privacy validator.
pub fn privacy() -> impl Validator {
    |profile: &Profile, _: &UiState| privacy_validation(profile)
}

/// Degree-inclusion switches must be backed by entries.
pub fn education_ui() -> impl Validator {
    education_ui_validation
}

/// The work-history switch must be backed by an entry.
pub fn employment_ui() -> impl Validator {
    employment_ui_validation
}

/// A program must be selected.
pub fn program_selection() -> impl Validator {
    program_validation
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tree::FieldPath;
    use proptest::prelude::*;

    fn errors_strategy() -> impl Strategy<Value = ValidationErrors> {
        let scalar = ("[a-c]", "[a-z]{1,6}").prop_map(|(k, m)| (FieldPath::field(k), m));
        let nested = ("[d-e]", 0usize..4, "[a-c]", "[a-z]{1,6}")
            .prop_map(|(c, i, k, m)| (FieldPath::entry(c, i, k), m));
        prop::collection::vec(prop_oneof![scalar, nested], 0..6).prop_map(|items| {
            let mut errors = ValidationErrors::new();
            for (path, message) in items {
                errors.set(&path, message);
            }
            errors
        })
    }

    fn fixed(errors: ValidationErrors) -> impl Validator + 'static {
        move |_: &Profile, _: &UiState| errors.clone()
    }

    fn boxed(errors: ValidationErrors) -> Box<dyn Validator> {
        Box::new(fixed(errors))
    }

    proptest! {
        /// A combined validator reports the left-to-right merge of its parts.
        #[test]
        fn combined_equals_merge_of_parts(
            trees in prop::collection::vec(errors_strategy(), 0..5),
        ) {
            let expected = trees
                .iter()
                .cloned()
                .fold(ValidationErrors::new(), ValidationErrors::merge);
            let combined = combine_validators(trees.into_iter().map(boxed).collect());
            let actual = combined.validate(&Profile::default(), &UiState::default());
            prop_assert_eq!(actual, expected);
        }

        /// Nesting combinators does not change the result.
        #[test]
        fn nested_combination_is_flat(
            a in errors_strategy(),
            b in errors_strategy(),
            c in errors_strategy(),
        ) {
            let (profile, ui) = (Profile::default(), UiState::default());
            let flat = combine_validators(vec![boxed(a.clone()), boxed(b.clone()), boxed(c.clone())]);
            let inner = combine_validators(vec![boxed(b), boxed(c)]);
            let nested = CombinedValidator::new().with(fixed(a)).with(inner);
            prop_assert_eq!(nested.validate(&profile, &ui), flat.validate(&profile, &ui));
        }
    }
}
