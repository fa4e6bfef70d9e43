//! # Degree Levels
//!
//! Defines the `DegreeLevel` enum: the five education levels a learner can
//! record. The wire codes (`hs`, `a`, `b`, `m`, `p`) are the values stored
//! by the backend in `education[].degree_name`.
//!
//! Every `match` on `DegreeLevel` is exhaustive, so adding a level forces
//! the UI-state validator and the label table to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MmError;

/// The education levels a learner can record.
///
/// | Code | Level |
/// |------|-------|
/// | `hs` | High school |
/// | `a`  | Associate degree |
/// | `b`  | Bachelor's degree |
/// | `m`  | Master's or professional degree |
/// | `p`  | Doctorate |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DegreeLevel {
    /// High school diploma. The only level without a field of study.
    #[serde(rename = "hs")]
    HighSchool,
    /// Associate degree.
    #[serde(rename = "a")]
    Associate,
    /// Bachelor's degree.
    #[serde(rename = "b")]
    Bachelors,
    /// Master's or professional degree.
    #[serde(rename = "m")]
    Masters,
    /// Doctorate.
    #[serde(rename = "p")]
    Doctorate,
}

/// Total number of degree levels.
pub const DEGREE_LEVEL_COUNT: usize = 5;

impl DegreeLevel {
    /// Returns all degree levels in ascending order.
    pub fn all_levels() -> &'static [DegreeLevel] {
        &[
            Self::HighSchool,
            Self::Associate,
            Self::Bachelors,
            Self::Masters,
            Self::Doctorate,
        ]
    }

    /// Returns the wire code for this level.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighSchool => "hs",
            Self::Associate => "a",
            Self::Bachelors => "b",
            Self::Masters => "m",
            Self::Doctorate => "p",
        }
    }

    /// Human-readable label shown next to the level's toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighSchool => "High school",
            Self::Associate => "Associate degree",
            Self::Bachelors => "Bachelor's degree",
            Self::Masters => "Master's or professional degree",
            Self::Doctorate => "Doctorate",
        }
    }

    /// Whether entries of this level record a field of study.
    pub fn has_field_of_study(&self) -> bool {
        !matches!(self, Self::HighSchool)
    }
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeLevel {
    type Err = MmError;

    /// Parse a degree level from its wire code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hs" => Ok(Self::HighSchool),
            "a" => Ok(Self::Associate),
            "b" => Ok(Self::Bachelors),
            "m" => Ok(Self::Masters),
            "p" => Ok(Self::Doctorate),
            other => Err(MmError::UnknownCode {
                kind: "degree level",
                value: other.to_string(),
            }),
        }
    }
}
