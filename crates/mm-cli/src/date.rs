//! # `mm date`
//!
//! Feed day/month/year fragments through a date field, in that order, and
//! print the resulting state:
//!
//! ```bash
//! $ mm date --day 31 --month 13 --year 2300
//! {"state":"committed","date":"2100-12-31","edit":{"day":"31","month":"12","year":"2100"}}
//! ```
//!
//! Exit code 0 when the field commits, 1 otherwise.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mm_validate::{DateComponent, DateEdit, DateField, DatePrecision};

/// Arguments for `mm date`.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Day text as typed. Non-digits are stripped; values above 31 clamp.
    #[arg(long, allow_hyphen_values = true)]
    pub day: Option<String>,

    /// Month text as typed. Non-digits are stripped; values above 12 clamp.
    #[arg(long, allow_hyphen_values = true)]
    pub month: Option<String>,

    /// Year text as typed. Clamped to 1800..=2100 once four digits are in.
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Month/year field: the day is fixed to the first of the month.
    #[arg(long)]
    pub month_only: bool,
}

#[derive(Serialize)]
struct DateOutput<'a> {
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    edit: &'a DateEdit,
}

/// Execute `mm date`, writing the field state to `out`.
pub fn run_date(args: &DateArgs, out: &mut impl Write) -> Result<u8> {
    let precision = if args.month_only {
        DatePrecision::Month
    } else {
        DatePrecision::Day
    };
    let mut field = DateField::new(precision);
    let fragments = [
        (DateComponent::Day, &args.day),
        (DateComponent::Month, &args.month),
        (DateComponent::Year, &args.year),
    ];
    for (component, text) in fragments {
        if let Some(text) = text {
            field.input(component, text);
        }
    }

    let output = DateOutput {
        state: field.state().as_str(),
        date: field.formatted(),
        edit: field.edit(),
    };
    writeln!(out, "{}", serde_json::to_string(&output)?)?;
    Ok(if output.date.is_some() { 0 } else { 1 })
}
