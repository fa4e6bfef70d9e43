//! # Validation Error Tree
//!
//! [`ValidationErrors`] mirrors the shape of a profile: scalar keys map to a
//! message, and a collection key (`education`, `work_history`) maps to the
//! errors of individual entries keyed by entry index.
//!
//! ## Index-Keyed Entries
//!
//! Entry errors are a map from index to that entry's error object. Only
//! entries with at least one error appear; there is no padding. Consumers
//! look up by index with [`ValidationErrors::entry`] rather than by
//! position in an array. Serialized as JSON, an entry map is an object whose
//! keys are decimal indices:
//!
//! ```text
//! {"work_history": {"1": {"end_date": "End date cannot be before start date"}}}
//! ```
//!
//! ## Merge
//!
//! [`ValidationErrors::merge`] is a recursive merge preferring the right
//! side at leaves:
//!
//! - field map + field map: keys are merged recursively;
//! - entry map + entry map: indices are merged recursively, so errors for
//!   different entries from different validators coexist;
//! - any other collision: the right-hand node replaces the left-hand one.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

// ─── Paths ──────────────────────────────────────────────────────────

/// One step below the head key of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Step {
    /// Descend into a nested field map.
    Key(String),
    /// Descend into entry `index` of a collection, then into `field`.
    Entry(usize, String),
}

/// A path locating a scalar leaf in a profile document.
///
/// A path always starts with a key and always ends with a key; an index is
/// always followed by the key of a field inside that entry. Construction
/// enforces this, so every path names a message slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    head: String,
    tail: Vec<Step>,
}

impl FieldPath {
    /// A top-level field, e.g. `first_name`.
    pub fn field(key: impl Into<String>) -> Self {
        Self {
            head: key.into(),
            tail: Vec::new(),
        }
    }

    /// A field of one entry of a collection, e.g. `work_history[1].end_date`.
    pub fn entry(collection: impl Into<String>, index: usize, key: impl Into<String>) -> Self {
        Self::field(collection).then_entry(index, key)
    }

    /// Extend the path into a nested field map.
    pub fn then_key(mut self, key: impl Into<String>) -> Self {
        self.tail.push(Step::Key(key.into()));
        self
    }

    /// Extend the path into entry `index`, field `key`.
    pub fn then_entry(mut self, index: usize, key: impl Into<String>) -> Self {
        self.tail.push(Step::Entry(index, key.into()));
        self
    }

    /// The key of the leaf this path names.
    pub fn leaf(&self) -> &str {
        match self.tail.last() {
            None => self.head.as_str(),
            Some(Step::Key(k)) | Some(Step::Entry(_, k)) => k.as_str(),
        }
    }

    /// Look the path up in a JSON document.
    ///
    /// Returns `None` when any container along the way is missing or has
    /// the wrong shape. Never panics.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let mut current = document.get(self.head.as_str())?;
        for step in &self.tail {
            current = match step {
                Step::Key(k) => current.get(k.as_str())?,
                Step::Entry(i, k) => current.get(*i)?.get(k.as_str())?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head)?;
        for step in &self.tail {
            match step {
                Step::Key(k) => write!(f, ".{k}")?,
                Step::Entry(i, k) => write!(f, "[{i}].{k}")?,
            }
        }
        Ok(())
    }
}

// ─── Tree ───────────────────────────────────────────────────────────

/// A node in the error tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorNode {
    /// A message attached to a scalar field.
    Message(String),
    /// Errors for nested fields.
    Fields(ValidationErrors),
    /// Errors for entries of a collection, keyed by entry index.
    Entries(BTreeMap<usize, ValidationErrors>),
}

/// Field-level validation errors. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, ErrorNode>);

impl ValidationErrors {
    /// An empty error tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of messages anywhere in the tree.
    pub fn message_count(&self) -> usize {
        self.0.values().map(ErrorNode::message_count).sum()
    }

    /// Top-level keys with errors, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set a top-level message, replacing whatever was under `key`.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), ErrorNode::Message(message.into()));
    }

    /// Set the message at `path`, creating intermediate maps as needed and
    /// replacing any message already there.
    pub fn set(&mut self, path: &FieldPath, message: impl Into<String>) {
        // Build the single-path tree from the leaf outwards, then merge it in:
        // merge already replaces leaves and keeps sibling fields and entries.
        let mut node = ErrorNode::Message(message.into());
        for step in path.tail.iter().rev() {
            node = match step {
                Step::Key(k) => ErrorNode::Fields(Self::single(k, node)),
                Step::Entry(i, k) => {
                    ErrorNode::Entries(BTreeMap::from([(*i, Self::single(k, node))]))
                }
            };
        }
        self.merge_from(Self::single(&path.head, node));
    }

    /// The message at `path`, if any.
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        let mut node = self.0.get(&path.head)?;
        for step in &path.tail {
            node = match (node, step) {
                (ErrorNode::Fields(fields), Step::Key(k)) => fields.0.get(k)?,
                (ErrorNode::Entries(entries), Step::Entry(i, k)) => entries.get(i)?.0.get(k)?,
                _ => return None,
            };
        }
        match node {
            ErrorNode::Message(m) => Some(m.as_str()),
            _ => None,
        }
    }

    /// The top-level message under `key`, if any.
    pub fn message(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            ErrorNode::Message(m) => Some(m.as_str()),
            _ => None,
        }
    }

    /// The errors recorded for entry `index` of `collection`, if any.
    pub fn entry(&self, collection: &str, index: usize) -> Option<&ValidationErrors> {
        match self.0.get(collection)? {
            ErrorNode::Entries(entries) => entries.get(&index),
            _ => None,
        }
    }

    /// Indices of `collection` entries that have errors, ascending.
    pub fn entry_indices(&self, collection: &str) -> Vec<usize> {
        match self.0.get(collection) {
            Some(ErrorNode::Entries(entries)) => entries.keys().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Every message with its dotted path, in sorted path order.
    pub fn flatten(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        self.collect_into("", &mut out);
        out
    }

    /// Merge `other` into `self`. See the module docs for the strategy.
    pub fn merge(mut self, other: ValidationErrors) -> ValidationErrors {
        self.merge_from(other);
        self
    }

    /// In-place form of [`merge`](Self::merge).
    pub fn merge_from(&mut self, other: ValidationErrors) {
        for (key, right) in other.0 {
            match self.0.remove(&key) {
                None => {
                    self.0.insert(key, right);
                }
                Some(left) => {
                    self.0.insert(key, left.merge(right));
                }
            }
        }
    }

    fn single(key: &str, node: ErrorNode) -> Self {
        Self(BTreeMap::from([(key.to_string(), node)]))
    }

    fn collect_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a str)>) {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                ErrorNode::Message(m) => out.push((path, m.as_str())),
                ErrorNode::Fields(fields) => fields.collect_into(&path, out),
                ErrorNode::Entries(entries) => {
                    for (i, entry) in entries {
                        entry.collect_into(&format!("{path}[{i}]"), out);
                    }
                }
            }
        }
    }
}

impl ErrorNode {
    fn message_count(&self) -> usize {
        match self {
            Self::Message(_) => 1,
            Self::Fields(fields) => fields.message_count(),
            Self::Entries(entries) => entries.values().map(ValidationErrors::message_count).sum(),
        }
    }

    fn merge(self, right: ErrorNode) -> ErrorNode {
        match (self, right) {
            (Self::Fields(mut left), Self::Fields(right)) => {
                left.merge_from(right);
                Self::Fields(left)
            }
            (Self::Entries(mut left), Self::Entries(right)) => {
                for (index, entry) in right {
                    match left.remove(&index) {
                        None => {
                            left.insert(index, entry);
                        }
                        Some(existing) => {
                            left.insert(index, existing.merge(entry));
                        }
                    }
                }
                Self::Entries(left)
            }
            (_, right) => right,
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, message)) in self.flatten().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {path}: {message}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, M: Into<String>> FromIterator<(K, M)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (key, message) in iter {
            errors.insert(key, message);
        }
        errors
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn errors_strategy() -> impl Strategy<Value = ValidationErrors> {
        let scalar = ("[a-c]", "[a-z]{1,6}").prop_map(|(k, m)| (FieldPath::field(k), m));
        let nested = ("[d-e]", 0usize..4, "[a-c]", "[a-z]{1,6}")
            .prop_map(|(c, i, k, m)| (FieldPath::entry(c, i, k), m));
        prop::collection::vec(prop_oneof![scalar, nested], 0..8).prop_map(|items| {
            let mut errors = ValidationErrors::new();
            for (path, message) in items {
                errors.set(&path, message);
            }
            errors
        })
    }

    proptest! {
        /// Merging with an empty tree changes nothing, on either side.
        #[test]
        fn merge_empty_is_identity(a in errors_strategy()) {
            prop_assert_eq!(a.clone().merge(ValidationErrors::new()), a.clone());
            prop_assert_eq!(ValidationErrors::new().merge(a.clone()), a);
        }

        /// Merging a tree with itself changes nothing.
        #[test]
        fn merge_idempotent(a in errors_strategy()) {
            prop_assert_eq!(a.clone().merge(a.clone()), a);
        }

        /// Every message of the right side survives the merge unchanged.
        #[test]
        fn merge_preserves_right_messages(a in errors_strategy(), b in errors_strategy()) {
            let merged = a.merge(b.clone());
            let merged_flat = merged.flatten();
            for (path, message) in b.flatten() {
                prop_assert!(merged_flat.contains(&(path.clone(), message)), "lost {}", path);
            }
        }

        /// Merge is associative.
        #[test]
        fn merge_associative(
            a in errors_strategy(),
            b in errors_strategy(),
            c in errors_strategy(),
        ) {
            let left = a.clone().merge(b.clone()).merge(c.clone());
            let right = a.merge(b.merge(c));
            prop_assert_eq!(left, right);
        }
    }
}
