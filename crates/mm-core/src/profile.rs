//! # Learner Profile
//!
//! The profile record edited by the personal, education, and employment
//! wizards: scalar personal fields plus two ordered collections,
//! `education` and `work_history`.
//!
//! ## Wire Leniency
//!
//! Profile documents arrive from the backend and from form state, and both
//! are loose about scalar types:
//!
//! - Text fields accept JSON numbers and keep their decimal text. A
//!   `first_name` of `0` is the text `"0"`, which is present.
//! - `education` and `work_history` accept `null` or a missing key as an
//!   empty collection.
//! - Coded fields (`degree_name`, `account_privacy`) treat `""` as unset.
//!
//! Absence semantics (what counts as "missing") belong to the validator,
//! not to these types.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::degree::DegreeLevel;
use crate::error::MmError;
use crate::identity::EntryId;
use crate::temporal::parse_profile_date;

// ─── Privacy ────────────────────────────────────────────────────────

/// Who may view the learner's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountPrivacy {
    /// Visible to everyone.
    Public,
    /// Visible to other MicroMasters learners.
    PublicToMm,
    /// Visible to program staff only.
    Private,
}

impl AccountPrivacy {
    /// Returns the wire code for this privacy level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::PublicToMm => "public_to_mm",
            Self::Private => "private",
        }
    }
}

impl FromStr for AccountPrivacy {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "public_to_mm" => Ok(Self::PublicToMm),
            "private" => Ok(Self::Private),
            other => Err(MmError::UnknownCode {
                kind: "account privacy",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Records ────────────────────────────────────────────────────────

/// A learner profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend username. Identifies the profile; never validated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub preferred_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub preferred_language: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state_or_territory: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub birth_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub birth_state_or_territory: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub birth_country: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub account_privacy: Option<AccountPrivacy>,
    #[serde(default)]
    pub email_optin: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work_history: Vec<WorkHistoryEntry>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Persisted identifier; `None` for entries not yet saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub degree_name: Option<DegreeLevel>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub graduation_date: Option<String>,
    /// Not recorded for high-school entries.
    #[serde(default, deserialize_with = "lenient_text")]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub online_degree: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school_state_or_territory: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school_country: Option<String>,
}

/// One work-history entry. An absent `end_date` means a current position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    /// Persisted identifier; `None` for entries not yet saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    /// Month/year typed into the end-date inputs but not yet committed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_edit: Option<MonthYearEdit>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state_or_territory: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
}

/// Uncommitted month/year text from a two-part date input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYearEdit {
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub month: String,
}

impl MonthYearEdit {
    /// True when nothing has been typed into either input.
    pub fn is_blank(&self) -> bool {
        self.year.is_empty() && self.month.is_empty()
    }
}

// ─── Profile behavior ───────────────────────────────────────────────

impl Profile {
    /// Serialize the profile into the JSON document shape the field-presence
    /// checker walks.
    ///
    /// # Errors
    ///
    /// Returns [`MmError::Serialization`] if serialization fails.
    pub fn to_document(&self) -> Result<Value, MmError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The name to greet the learner by: preferred name, then first name,
    /// then username.
    pub fn display_name(&self) -> Option<&str> {
        [&self.preferred_name, &self.first_name, &self.username]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|s| !s.trim().is_empty())
    }

    /// Parsed date of birth, if present and well-formed.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.date_of_birth
            .as_deref()
            .and_then(|s| parse_profile_date(s).ok())
    }

    /// Whether at least one education entry has the given level.
    pub fn has_degree(&self, level: DegreeLevel) -> bool {
        self.education
            .iter()
            .any(|entry| entry.degree_name == Some(level))
    }
}

impl EducationEntry {
    /// A blank, unsaved entry pre-set to `level`.
    ///
    /// High-school entries carry no field of study; every other level starts
    /// with an empty one.
    pub fn new_for_level(level: DegreeLevel) -> Self {
        Self {
            degree_name: Some(level),
            field_of_study: None,
            online_degree: Some(false),
            ..Self::default()
        }
    }

    /// Parsed graduation date, if present and well-formed.
    pub fn graduated_on(&self) -> Option<NaiveDate> {
        self.graduation_date
            .as_deref()
            .and_then(|s| parse_profile_date(s).ok())
    }
}

impl WorkHistoryEntry {
    /// A blank, unsaved entry.
    pub fn new_blank() -> Self {
        Self::default()
    }

    /// Parsed start date, if present and well-formed.
    pub fn started_on(&self) -> Option<NaiveDate> {
        self.start_date
            .as_deref()
            .and_then(|s| parse_profile_date(s).ok())
    }

    /// Whether this is a current position (no end date recorded).
    pub fn is_current(&self) -> bool {
        self.end_date.as_deref().map_or(true, str::is_empty)
    }
}

// ─── Entry utilities ────────────────────────────────────────────────

/// An entry that may have been persisted by the backend.
pub trait PersistedEntry {
    /// The persisted identifier, or `None` for an unsaved entry.
    fn entry_id(&self) -> Option<EntryId>;
}

impl PersistedEntry for EducationEntry {
    fn entry_id(&self) -> Option<EntryId> {
        self.id
    }
}

impl PersistedEntry for WorkHistoryEntry {
    fn entry_id(&self) -> Option<EntryId> {
        self.id
    }
}

/// Entries that have been saved, paired with their index in `entries`.
pub fn saved_entries<T: PersistedEntry>(entries: &[T]) -> Vec<(usize, &T)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.entry_id().is_some())
        .collect()
}

/// Work-history entries paired with their original index, newest start
/// date first. Entries with a missing or malformed start date sort last,
/// in their original order.
pub fn work_entries_by_date(entries: &[WorkHistoryEntry]) -> Vec<(usize, &WorkHistoryEntry)> {
    sorted_newest_first(entries, WorkHistoryEntry::started_on)
}

/// Education entries paired with their original index, newest graduation
/// date first. Entries with a missing or malformed date sort last.
pub fn education_entries_by_date(entries: &[EducationEntry]) -> Vec<(usize, &EducationEntry)> {
    sorted_newest_first(entries, EducationEntry::graduated_on)
}

fn sorted_newest_first<T>(
    entries: &[T],
    date_of: impl Fn(&T) -> Option<NaiveDate>,
) -> Vec<(usize, &T)> {
    let mut indexed: Vec<(usize, &T)> = entries.iter().enumerate().collect();
    // `None < Some(_)`, so reversing puts undated entries last. The sort is
    // stable, which keeps equal dates in their original order.
    indexed.sort_by(|(_, a), (_, b)| date_of(*b).cmp(&date_of(*a)));
    indexed
}

// ─── Lenient deserializers ──────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(TextOrNumber::into_text))
}

fn lenient_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = MmError>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
