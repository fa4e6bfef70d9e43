//! # Error Types
//!
//! Errors raised while constructing or converting profile values. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation outcomes are never errors. A missing first name is a
//!   `ValidationErrors` entry produced by the validator, not an `MmError`.
//! - `MmError` covers the narrower set of failures where a value cannot be
//!   interpreted at all: an unknown degree code, a date string that is not
//!   a calendar date, or a document that cannot be serialized.

use thiserror::Error;

/// Top-level error type for the profile types crate.
#[derive(Error, Debug)]
pub enum MmError {
    /// A date string could not be parsed as a calendar date.
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A coded value (degree level, privacy level) was not recognized.
    #[error("unknown {kind} code: {value:?}")]
    UnknownCode {
        /// Which code table was consulted.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
