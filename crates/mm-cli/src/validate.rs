//! # `mm validate`
//!
//! Validate one profile document, optionally with UI state, and print the
//! merged error tree as JSON.
//!
//! ```bash
//! mm validate profile.yaml
//! mm validate profile.json --ui ui.json --section education
//! ```
//!
//! Exit code 0 when there are no errors, 1 when there are.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use mm_core::UiState;
use mm_schema::{load_profile, load_ui_state, ShapeChecker};
use mm_validate::compose::{
    education, education_ui, employment, employment_ui, personal, privacy, program_selection,
};
use mm_validate::{CombinedValidator, Validator};

/// Arguments for `mm validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Profile document (JSON, or YAML by `.yaml`/`.yml` extension).
    pub profile: PathBuf,

    /// UI-state document. Defaults to every switch off and no program.
    #[arg(long)]
    pub ui: Option<PathBuf>,

    /// Which validators to run.
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

/// A group of validators, one per profile tab plus the UI checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Personal,
    Education,
    Employment,
    Privacy,
    /// Degree switches, work-history switch, program selection.
    Ui,
    /// Every field-level section plus the UI switches. Program selection is
    /// only checked by `ui`.
    All,
}

impl Section {
    /// The validators this section runs, in merge order.
    pub fn validator(self, today: NaiveDate) -> CombinedValidator {
        let combined = CombinedValidator::new();
        match self {
            Self::Personal => combined.with(personal(today)),
            Self::Education => combined.with(education()).with(education_ui()),
            Self::Employment => combined.with(employment(today)).with(employment_ui()),
            Self::Privacy => combined.with(privacy()),
            Self::Ui => combined
                .with(education_ui())
                .with(employment_ui())
                .with(program_selection()),
            Self::All => combined
                .with(personal(today))
                .with(education())
                .with(education_ui())
                .with(employment(today))
                .with(employment_ui())
                .with(privacy()),
        }
    }
}

/// Execute `mm validate`, writing the error tree to `out`.
pub fn run_validate(args: &ValidateArgs, today: NaiveDate, out: &mut impl Write) -> Result<u8> {
    let checker = ShapeChecker::new()?;
    let profile = load_profile(&checker, &args.profile)
        .with_context(|| format!("loading profile {}", args.profile.display()))?;
    let ui = match &args.ui {
        Some(path) => load_ui_state(&checker, path)
            .with_context(|| format!("loading ui state {}", path.display()))?,
        None => UiState::default(),
    };

    let errors = args.section.validator(today).validate(&profile, &ui);
    tracing::info!(
        section = ?args.section,
        messages = errors.message_count(),
        "validation finished"
    );
    writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?;
    Ok(if errors.is_empty() { 0 } else { 1 })
}
