//! # UI-State Validators
//!
//! Checks that depend on switches and selections held in [`UiState`]
//! rather than on profile fields alone. Their messages are section-level
//! (top-level keys), never attached to a particular entry.

use mm_core::{Profile, UiState};

use crate::messages::{PROGRAM_REQUIRED, WORK_HISTORY_REQUIRED};
use crate::tree::ValidationErrors;

/// For every degree level switched on in the UI with no education entry of
/// that level, report `education_<code>_required`.
pub fn education_ui_validation(profile: &Profile, ui: &UiState) -> ValidationErrors {
    ui.included_degrees()
        .filter(|level| !profile.has_degree(*level))
        .map(|level| {
            (
                format!("education_{}_required", level.as_str()),
                format!(
                    "{} is required if switch is on. Please add a degree or switch it off.",
                    level.label()
                ),
            )
        })
        .collect()
}

/// With the work-history switch on, at least one entry is required.
pub fn employment_ui_validation(profile: &Profile, ui: &UiState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if ui.work_history_edit && profile.work_history.is_empty() {
        errors.insert("work_history_required", WORK_HISTORY_REQUIRED);
    }
    errors
}

/// A program must be selected.
pub fn program_validation(_profile: &Profile, ui: &UiState) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if ui.selected_program.is_none() {
        errors.insert("program", PROGRAM_REQUIRED);
    }
    errors
}
