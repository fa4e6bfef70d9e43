//! Email composition form validation.

use serde::{Deserialize, Serialize};

use crate::messages::{EMAIL_BODY_REQUIRED, EMAIL_SUBJECT_REQUIRED};
use crate::tree::ValidationErrors;

/// The subject and body of an email being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Subject and body must each contain something other than whitespace.
pub fn email_validation(email: &EmailForm) -> ValidationErrors {
    let blank = |text: &Option<String>| text.as_deref().map_or(true, |t| t.trim().is_empty());
    let mut errors = ValidationErrors::new();
    if blank(&email.subject) {
        errors.insert("subject", EMAIL_SUBJECT_REQUIRED);
    }
    if blank(&email.body) {
        errors.insert("body", EMAIL_BODY_REQUIRED);
    }
    errors
}
