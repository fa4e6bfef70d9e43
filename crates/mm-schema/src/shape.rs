//! # Document Shape Checking
//!
//! Validates raw JSON documents against the schemas embedded in this crate
//! (Draft 2020-12) before they are deserialized into typed records.
//!
//! Shape checking rejects documents whose values have the wrong JSON type
//! or an unknown code (degree level, privacy level). It never enforces
//! presence: a profile with every field missing is well-shaped, and the
//! profile validators report what is missing.

use std::fmt;

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::document::DocumentError;

const PROFILE_SCHEMA: &str = include_str!("../schemas/profile.schema.json");
const UI_STATE_SCHEMA: &str = include_str!("../schemas/ui_state.schema.json");

/// The kinds of document this crate can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Profile,
    UiState,
}

impl DocumentKind {
    /// Schema filename, as used in error messages.
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Profile => "profile.schema.json",
            Self::UiState => "ui_state.schema.json",
        }
    }

    fn schema_source(&self) -> &'static str {
        match self {
            Self::Profile => PROFILE_SCHEMA,
            Self::UiState => UI_STATE_SCHEMA,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => f.write_str("profile"),
            Self::UiState => f.write_str("ui state"),
        }
    }
}

/// A single shape violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Violations found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled validators for every [`DocumentKind`].
///
/// Compile once and reuse; building a validator parses the schema.
pub struct ShapeChecker {
    profile: Validator,
    ui_state: Validator,
}

impl fmt::Debug for ShapeChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeChecker").finish_non_exhaustive()
    }
}

impl ShapeChecker {
    /// Compile the embedded schemas.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SchemaBuild`] if an embedded schema is not
    /// valid JSON or not a valid schema.
    pub fn new() -> Result<Self, DocumentError> {
        Ok(Self {
            profile: compile(DocumentKind::Profile)?,
            ui_state: compile(DocumentKind::UiState)?,
        })
    }

    fn validator(&self, kind: DocumentKind) -> &Validator {
        match kind {
            DocumentKind::Profile => &self.profile,
            DocumentKind::UiState => &self.ui_state,
        }
    }

    /// Every shape violation in `instance`. Empty when well-shaped.
    pub fn violations(&self, kind: DocumentKind, instance: &Value) -> Violations {
        Violations(
            self.validator(kind)
                .iter_errors(instance)
                .map(|e| Violation {
                    instance_path: e.instance_path.to_string(),
                    schema_path: e.schema_path.to_string(),
                    message: e.to_string(),
                })
                .collect(),
        )
    }

    /// Check `instance`, failing with every violation found.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Shape`] when the document is not well-shaped.
    pub fn check(&self, kind: DocumentKind, instance: &Value) -> Result<(), DocumentError> {
        let violations = self.violations(kind, instance);
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(kind = %kind, count = violations.len(), "document shape rejected");
            Err(DocumentError::Shape { kind, violations })
        }
    }
}

fn compile(kind: DocumentKind) -> Result<Validator, DocumentError> {
    let build_error = |reason: String| DocumentError::SchemaBuild {
        schema_name: kind.schema_name(),
        reason,
    };
    let schema: Value =
        serde_json::from_str(kind.schema_source()).map_err(|e| build_error(e.to_string()))?;
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|e| build_error(e.to_string()))
}
