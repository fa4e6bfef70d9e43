//! # mm-cli — Profile Validator CLI
//!
//! Provides the `mm` command-line interface over the profile validators.
//!
//! ## Subcommands
//!
//! - `mm validate`: run section or UI validators over a profile document.
//! - `mm complete`: find the first incomplete profile step.
//! - `mm date`: run day/month/year fragments through a date field.
//!
//! ## Exit Codes
//!
//! - 0: valid, complete, or committed.
//! - 1: validation errors, incomplete, or not committed.
//! - 2: the command itself failed (unreadable file, bad shape, bad config).

pub mod complete;
pub mod config;
pub mod date;
pub mod validate;

pub use config::{CliConfig, LogFormat};

/// Exit code for a command that could not run.
pub const EXIT_FAILURE: u8 = 2;
