//! Structured merge for the package manifest (`package.json`).

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Fields the user owns once the project has been generated.
///
/// The existing manifest decides these outright: its value survives the
/// upgrade, and a field it lacks stays absent even if the template sets it.
pub const USER_OWNED_FIELDS: &[&str] = &[
    "author",
    "description",
    "es2015",
    "keywords",
    "license",
    "main",
    "module",
    "name",
    "repository",
    "typings",
    "version",
];

/// Which side of a merge failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    Existing,
    Replacement,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSide::Existing => write!(f, "existing"),
            MergeSide::Replacement => write!(f, "replacement"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Malformed {side} content: {source}")]
    Malformed {
        side: MergeSide,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {0} content: expected a JSON object")]
    NotAnObject(MergeSide),

    #[error("Failed to serialize merged content: {0}")]
    Serialize(#[source] serde_json::Error),
}

fn parse_object(text: &str, side: MergeSide) -> Result<Map<String, Value>, MergeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| MergeError::Malformed { side, source })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(MergeError::NotAnObject(side)),
    }
}

/// Recursively union `existing` into `replacement`.
///
/// Keys keep the replacement's order; keys only present in `existing` are
/// appended after them. Where both sides hold an object the union recurses,
/// otherwise the replacement value wins. Arrays are never concatenated.
fn deep_merge(replacement: Map<String, Value>, existing: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::with_capacity(replacement.len().max(existing.len()));

    for (key, value) in replacement {
        let value = match (value, existing.get(&key)) {
            (Value::Object(theirs), Some(Value::Object(ours))) => {
                Value::Object(deep_merge(theirs, ours))
            }
            (value, _) => value,
        };
        merged.insert(key, value);
    }

    for (key, value) in existing {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }

    merged
}

/// Merge an existing package manifest with the template's version.
///
/// Non-owned fields follow the template; every field in
/// [`USER_OWNED_FIELDS`] is taken from the existing manifest, or dropped
/// when the existing manifest does not have it. The result is pretty-printed with two-space indentation and a
/// trailing newline. Merging the result again with the same replacement
/// yields the same text.
pub fn merge_structured(existing: &str, replacement: &str) -> Result<String, MergeError> {
    let existing = parse_object(existing, MergeSide::Existing)?;
    let replacement = parse_object(replacement, MergeSide::Replacement)?;

    let mut merged = deep_merge(replacement, &existing);

    for field in USER_OWNED_FIELDS {
        match existing.get(*field) {
            Some(value) => {
                merged.insert((*field).to_string(), value.clone());
            }
            None => {
                merged.shift_remove(*field);
            }
        }
    }

    let mut content =
        serde_json::to_string_pretty(&Value::Object(merged)).map_err(MergeError::Serialize)?;
    content.push('\n');
    Ok(content)
}
