//! # mm-core — Learner Profile Types
//!
//! The leaf crate of the workspace. Defines the data the profile validator
//! inspects: the learner [`Profile`] with its ordered education and
//! work-history collections, the [`UiState`] selections that the UI-aware
//! validators consult, and the calendar helpers used to compare profile
//! dates.
//!
//! ## Key Design Principles
//!
//! 1. **Wire-compatible shapes.** Field names and degree codes match the
//!    profile documents served by the backend API, so a document can be
//!    deserialized straight into [`Profile`].
//!
//! 2. **Absence is explicit.** Every user-editable field is an `Option`.
//!    A missing key, `null`, and an empty string are distinct on the wire;
//!    the validator decides which of them count as "absent".
//!
//! 3. **Values, not handles.** A `Profile` is cloned and replaced on every
//!    edit. Nothing in this crate holds interior mutability.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod degree;
pub mod error;
pub mod identity;
pub mod profile;
pub mod temporal;
pub mod ui;

// Re-export primary types for ergonomic imports.
pub use degree::{DegreeLevel, DEGREE_LEVEL_COUNT};
pub use error::MmError;
pub use identity::{EntryId, ProgramId};
pub use profile::{
    education_entries_by_date, saved_entries, work_entries_by_date, AccountPrivacy,
    EducationEntry, MonthYearEdit, PersistedEntry, Profile, WorkHistoryEntry,
};
pub use temporal::{format_profile_date, parse_profile_date, MonthOfYear, PROFILE_DATE_FORMAT};
pub use ui::UiState;
