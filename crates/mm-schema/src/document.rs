//! # Document Loading
//!
//! Reads profile and UI-state documents from disk. The format follows the
//! file extension: `.yaml`/`.yml` is YAML, anything else is JSON. YAML is
//! converted to a JSON value first so both formats go through the same
//! shape check and the same lenient deserializers.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use mm_core::{Profile, UiState};

use crate::shape::{DocumentKind, ShapeChecker, Violations};

/// Failure to turn a file into a typed document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or YAML.
    #[error("cannot parse '{path}': {reason}")]
    Parse { path: String, reason: String },

    /// The document does not have the expected shape.
    #[error("{kind} document rejected:\n{violations}")]
    Shape {
        kind: DocumentKind,
        violations: Violations,
    },

    /// The well-shaped document still failed typed deserialization.
    #[error("cannot decode {kind} document: {source}")]
    Decode {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },

    /// An embedded schema failed to compile.
    #[error("schema '{schema_name}' failed to build: {reason}")]
    SchemaBuild {
        schema_name: &'static str,
        reason: String,
    },
}

/// Read `path` into a JSON value, converting YAML by extension.
///
/// # Errors
///
/// [`DocumentError::Read`] or [`DocumentError::Parse`].
pub fn read_document(path: &Path) -> Result<Value, DocumentError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: display.clone(),
        source,
    })?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parse_error = |reason: String| DocumentError::Parse {
        path: display.clone(),
        reason,
    };
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| parse_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(yaml).map_err(|e| parse_error(e.to_string()))
        }
        _ => serde_json::from_str(&content).map_err(|e| parse_error(format!("invalid JSON: {e}"))),
    }
}

/// Shape-check `value` as a `kind` document and decode it.
///
/// # Errors
///
/// [`DocumentError::Shape`] or [`DocumentError::Decode`].
pub fn decode_document<T: DeserializeOwned>(
    checker: &ShapeChecker,
    kind: DocumentKind,
    value: Value,
) -> Result<T, DocumentError> {
    checker.check(kind, &value)?;
    serde_json::from_value(value).map_err(|source| DocumentError::Decode { kind, source })
}

/// Load a learner profile from a JSON or YAML file.
///
/// # Errors
///
/// Any [`DocumentError`] variant.
pub fn load_profile(checker: &ShapeChecker, path: &Path) -> Result<Profile, DocumentError> {
    let profile: Profile = decode_document(checker, DocumentKind::Profile, read_document(path)?)?;
    tracing::debug!(
        path = %path.display(),
        education = profile.education.len(),
        work_history = profile.work_history.len(),
        "profile loaded"
    );
    Ok(profile)
}

/// Load UI state from a JSON or YAML file.
///
/// # Errors
///
/// Any [`DocumentError`] variant.
pub fn load_ui_state(checker: &ShapeChecker, path: &Path) -> Result<UiState, DocumentError> {
    decode_document(checker, DocumentKind::UiState, read_document(path)?)
}

/// A YAML node with no JSON counterpart, located by JSON pointer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("YAML value at '{pointer}' has no JSON form: {reason}")]
pub struct YamlConversionError {
    pub pointer: String,
    pub reason: String,
}

/// Convert a parsed YAML document into the JSON value the shape checker
/// sees.
///
/// Scalar map keys become strings (`2024: x` and `"2024": x` are the same
/// field). Non-finite numbers, custom tags and compound keys are rejected
/// with the pointer of the offending node.
///
/// # Errors
///
/// [`YamlConversionError`] naming the first node that cannot be converted.
pub fn yaml_to_json_value(yaml: serde_yaml::Value) -> Result<Value, YamlConversionError> {
    convert_yaml(yaml, "")
}

fn convert_yaml(yaml: serde_yaml::Value, pointer: &str) -> Result<Value, YamlConversionError> {
    use serde_yaml::Value as Yaml;

    let reject = |reason: String| YamlConversionError {
        pointer: if pointer.is_empty() {
            "/".to_string()
        } else {
            pointer.to_string()
        },
        reason,
    };

    let value = match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::String(s) => Value::String(s),
        Yaml::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Value::from(i),
            (None, Some(u)) => Value::from(u),
            (None, None) => n
                .as_f64()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| reject(format!("{n} is not a finite number")))?,
        },
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| convert_yaml(item, &format!("{pointer}/{i}")))
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(reject(format!("map key {other:?} is not a scalar"))),
                };
                let child = format!("{pointer}/{}", key.replace('~', "~0").replace('/', "~1"));
                let item = convert_yaml(item, &child)?;
                object.insert(key, item);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => return Err(reject(format!("tag {} is not supported", tagged.tag))),
    };
    Ok(value)
}
