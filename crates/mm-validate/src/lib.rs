//! # mm-validate — Profile Validator
//!
//! Pure functions that inspect a learner [`Profile`](mm_core::Profile) and
//! the surrounding [`UiState`](mm_core::UiState) and return a tree of
//! field-level error messages. Form components call these on every edit and
//! on submit, and render each message next to its field.
//!
//! ## Modules
//!
//! - [`tree`]: [`ValidationErrors`], the error tree, with index-keyed entry
//!   errors and a recursive merge.
//! - [`presence`]: the field-presence checker every section validator
//!   builds on.
//! - [`sections`]: personal, education, employment, and privacy validators.
//! - [`ui`]: validators driven by UI switches (degree inclusions, work
//!   history switch, program selection).
//! - [`compose`]: the [`Validator`] trait and the combinator that merges
//!   several validators into one.
//! - [`completeness`]: the whole-profile check that picks which step to send
//!   the learner back to.
//! - [`date_input`]: sanitization of typed day/month/year fragments and the
//!   date-field state machine.
//! - [`email`]: the email composition form.
//!
//! ## Guarantees
//!
//! - Validators are pure: same inputs, same output, inputs untouched.
//! - Validators never fail. Malformed or missing collections produce no
//!   errors rather than a panic.
//! - "Today" is always an argument. Nothing in this crate reads the clock.

pub mod completeness;
pub mod compose;
pub mod date_input;
pub mod email;
pub mod messages;
pub mod presence;
pub mod sections;
pub mod tree;
pub mod ui;

pub use completeness::{validate_profile_complete, Completeness, CompletenessReport, ProfileStep};
pub use compose::{combine_validators, CombinedValidator, Validator};
pub use date_input::{
    commit_month_year, compose_date, sanitize_date, validate_day, validate_month, validate_year, DateComponent,
    DateEdit, DateField, DateFieldState, DatePrecision,
};
pub use email::{email_validation, EmailForm};
pub use presence::check_field_presence;
pub use sections::{
    education_validation, employment_validation, personal_validation, privacy_validation,
};
pub use tree::{ErrorNode, FieldPath, ValidationErrors};
pub use ui::{education_ui_validation, employment_ui_validation, program_validation};
