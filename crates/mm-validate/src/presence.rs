//! # Field-Presence Checker
//!
//! Resolves each required path in a JSON document and records
//! `"<label> is required"` for every path whose value is absent.
//!
//! Absent means: the path does not resolve (including through a missing
//! intermediate container), or it resolves to `null` or `""`. Numeric zero
//! and `false` are present.

use serde_json::Value;

use crate::messages::{required_message, FieldLabels};
use crate::tree::{FieldPath, ValidationErrors};

/// Check that every path in `required` resolves to a present value in
/// `document`. The returned tree holds only the failing paths.
pub fn check_field_presence(
    document: &Value,
    required: &[FieldPath],
    labels: &FieldLabels,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for path in required {
        if is_absent(path.resolve(document)) {
            tracing::trace!(path = %path, "required field absent");
            errors.set(path, required_message(labels, path.leaf()));
        }
    }
    errors
}

/// Whether a resolved value counts as absent.
pub fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::PERSONAL_LABELS;
    use serde_json::json;

    fn paths(keys: &[&str]) -> Vec<FieldPath> {
        keys.iter().map(|k| FieldPath::field(*k)).collect()
    }

    #[test]
    fn test_zero_is_present() {
        let errors = check_field_presence(
            &json!({"first_name": 0}),
            &paths(&["first_name"]),
            PERSONAL_LABELS,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_false_is_present() {
        let errors = check_field_presence(
            &json!({"flag": false}),
            &paths(&["flag"]),
            PERSONAL_LABELS,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_null_empty_and_missing_are_absent() {
        let doc = json!({"first_name": null, "last_name": ""});
        let errors = check_field_presence(
            &doc,
            &paths(&["first_name", "last_name", "gender"]),
            PERSONAL_LABELS,
        );
        assert_eq!(errors.message("first_name"), Some("Given name is required"));
        assert_eq!(errors.message("last_name"), Some("Family name is required"));
        assert_eq!(errors.message("gender"), Some("Gender is required"));
    }

    #[test]
    fn test_whitespace_is_present() {
        let errors = check_field_presence(
            &json!({"first_name": " "}),
            &paths(&["first_name"]),
            PERSONAL_LABELS,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_container_is_absent_not_panic() {
        let required = vec![FieldPath::entry("education", 2, "school_name")];
        let errors = check_field_presence(&json!({}), &required, PERSONAL_LABELS);
        assert_eq!(
            errors.get(&required[0]),
            Some("school_name is required")
        );
    }

    #[test]
    fn test_only_failing_paths_reported() {
        let doc = json!({"first_name": "Jane", "last_name": null});
        let errors = check_field_presence(
            &doc,
            &paths(&["first_name", "last_name"]),
            PERSONAL_LABELS,
        );
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["last_name"]);
    }
}
