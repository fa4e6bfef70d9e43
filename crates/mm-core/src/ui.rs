//! # UI Selection State
//!
//! The transient selections the profile and dashboard screens hold outside
//! the profile itself. Only the UI-aware validators read it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::degree::DegreeLevel;
use crate::identity::ProgramId;

/// Transient UI selections relevant to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// The program picked in the program selector, if any.
    #[serde(default)]
    pub selected_program: Option<ProgramId>,

    /// Per-level "I have this degree" switches on the education tab.
    #[serde(default)]
    pub education_degree_inclusions: BTreeMap<DegreeLevel, bool>,

    /// The "I have work history" switch on the employment tab.
    #[serde(default)]
    pub work_history_edit: bool,
}

impl UiState {
    /// Whether the switch for `level` is on.
    pub fn includes_degree(&self, level: DegreeLevel) -> bool {
        self.education_degree_inclusions
            .get(&level)
            .copied()
            .unwrap_or(false)
    }

    /// Levels whose switch is on, in ascending order.
    pub fn included_degrees(&self) -> impl Iterator<Item = DegreeLevel> + '_ {
        self.education_degree_inclusions
            .iter()
            .filter(|(_, on)| **on)
            .map(|(level, _)| *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_has_nothing_selected() {
        let ui = UiState::default();
        assert!(ui.selected_program.is_none());
        assert!(!ui.work_history_edit);
        assert_eq!(ui.included_degrees().count(), 0);
    }

    #[test]
    fn test_deserialize_inclusions_by_code() {
        let ui: UiState = serde_json::from_value(json!({
            "selected_program": 3,
            "education_degree_inclusions": {"hs": true, "b": false, "m": true},
        }))
        .unwrap();
        assert_eq!(ui.selected_program, Some(ProgramId(3)));
        assert!(ui.includes_degree(DegreeLevel::HighSchool));
        assert!(!ui.includes_degree(DegreeLevel::Bachelors));
        assert!(!ui.includes_degree(DegreeLevel::Doctorate));
        let on: Vec<_> = ui.included_degrees().collect();
        assert_eq!(on, vec![DegreeLevel::HighSchool, DegreeLevel::Masters]);
    }
}
