//! # `mm complete`
//!
//! Check a profile for completeness and print
//! `{"complete": ..., "step": ..., "errors": {...}}`.
//!
//! Exit code 0 when complete, 1 when a step is incomplete.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use mm_schema::{load_profile, ShapeChecker};
use mm_validate::validate_profile_complete;

/// Arguments for `mm complete`.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Profile document (JSON, or YAML by `.yaml`/`.yml` extension).
    pub profile: PathBuf,
}

/// Execute `mm complete`, writing the report to `out`.
pub fn run_complete(args: &CompleteArgs, today: NaiveDate, out: &mut impl Write) -> Result<u8> {
    let checker = ShapeChecker::new()?;
    let profile = load_profile(&checker, &args.profile)
        .with_context(|| format!("loading profile {}", args.profile.display()))?;

    let report = validate_profile_complete(&profile, today).report();
    match report.step {
        Some(step) => tracing::info!(step = %step, "profile incomplete"),
        None => tracing::info!("profile complete"),
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(if report.complete { 0 } else { 1 })
}
