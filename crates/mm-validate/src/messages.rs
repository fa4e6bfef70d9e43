//! # Field Labels and Rule Messages
//!
//! Presence errors read `"<label> is required"`, where the label is looked
//! up by the leaf key of the missing field. Rule messages are fixed strings.

/// Field key → human label.
pub type FieldLabels = [(&'static str, &'static str)];

/// Required personal-information fields, in form order.
pub const PERSONAL_LABELS: &FieldLabels = &[
    ("first_name", "Given name"),
    ("last_name", "Family name"),
    ("preferred_name", "Nickname / Preferred name"),
    ("gender", "Gender"),
    ("preferred_language", "Preferred language"),
    ("city", "City"),
    ("state_or_territory", "State or Territory"),
    ("country", "Country"),
    ("birth_city", "City"),
    ("birth_state_or_territory", "State or Territory"),
    ("birth_country", "Country"),
    ("date_of_birth", "Birth Date"),
];

/// Required fields of each education entry, in form order.
pub const EDUCATION_LABELS: &FieldLabels = &[
    ("degree_name", "Degree level"),
    ("graduation_date", "Graduation date"),
    ("field_of_study", "Field of study"),
    ("online_degree", "Online Degree"),
    ("school_name", "School name"),
    ("school_city", "City"),
    ("school_state_or_territory", "State"),
    ("school_country", "Country"),
];

/// Required fields of each work-history entry, in form order.
pub const EMPLOYMENT_LABELS: &FieldLabels = &[
    ("position", "Position"),
    ("industry", "Industry"),
    ("company_name", "Name of Employer"),
    ("start_date", "Start Date"),
    ("city", "City"),
    ("country", "Country"),
    ("state_or_territory", "State or Territory"),
];

/// Required privacy fields.
pub const PRIVACY_LABELS: &FieldLabels = &[("account_privacy", "Privacy level")];

pub const INVALID_BIRTH_DATE: &str = "Please enter a valid date of birth";
pub const END_DATE_BEFORE_START: &str = "End date cannot be before start date";
pub const END_DATE_INCOMPLETE: &str = "Please enter a valid end date or leave it blank";
pub const END_DATE_IN_FUTURE: &str = "End date cannot be in the future";
pub const WORK_HISTORY_REQUIRED: &str =
    "Work history is required if switch is on. Please add work history or switch it off.";
pub const PROGRAM_REQUIRED: &str = "Please select a valid program";
pub const EMAIL_SUBJECT_REQUIRED: &str = "Please fill in a subject";
pub const EMAIL_BODY_REQUIRED: &str = "Please fill in a body";

/// Look up the label for `key`, falling back to the key itself.
pub fn label_for(labels: &FieldLabels, key: &str) -> String {
    labels
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// The presence error for `key`.
pub fn required_message(labels: &FieldLabels, key: &str) -> String {
    format!("{} is required", label_for(labels, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_uses_label() {
        assert_eq!(
            required_message(PERSONAL_LABELS, "first_name"),
            "Given name is required"
        );
        assert_eq!(
            required_message(EMPLOYMENT_LABELS, "company_name"),
            "Name of Employer is required"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(required_message(PRIVACY_LABELS, "mystery"), "mystery is required");
    }

    #[test]
    fn test_label_tables_have_unique_keys() {
        for table in [PERSONAL_LABELS, EDUCATION_LABELS, EMPLOYMENT_LABELS, PRIVACY_LABELS] {
            let mut seen = std::collections::HashSet::new();
            for (key, _) in table {
                assert!(seen.insert(key), "duplicate key {key}");
            }
        }
    }
}
