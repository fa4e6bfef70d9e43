//! # mm-schema — Document Loading & Shape Checking
//!
//! Turns profile and UI-state files into typed [`mm_core`] records.
//!
//! ## Pipeline
//!
//! 1. [`read_document`]: read a file, parsing JSON or YAML by extension.
//! 2. [`ShapeChecker`]: validate the raw value against the embedded JSON
//!    Schema for its [`DocumentKind`] (Draft 2020-12).
//! 3. Deserialize into [`Profile`](mm_core::Profile) or
//!    [`UiState`](mm_core::UiState).
//!
//! ## Crate Policy
//!
//! - Depends only on `mm-core` internally.
//! - Schemas check types and codes, never presence. Missing fields are the
//!   profile validators' business and must survive loading.

pub mod document;
pub mod shape;

pub use document::{
    decode_document, load_profile, load_ui_state, read_document, yaml_to_json_value,
    DocumentError, YamlConversionError,
};
pub use shape::{DocumentKind, ShapeChecker, Violation, Violations};
