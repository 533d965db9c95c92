//! The manifest of files the generator manages in a project.
//!
//! The manifest is plain data: every entry names a template, where it is
//! written, and which merge strategy reconciles it with the user's copy.
//! It never changes during an upgrade run.

mod managed_files;
mod types;

pub use managed_files::get_managed_files;
pub use types::{ManagedFileEntry, MergeStrategy};

use std::path::Path;
use thiserror::Error;
use tokio::fs;
use types::ManagedFileRecord;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unrecognized merge strategy '{0}'")]
    UnknownStrategy(String),
}

/// Parse a manifest from its JSON form.
///
/// Any unrecognized strategy fails the whole manifest.
pub fn parse_manifest(content: &str) -> Result<Vec<ManagedFileEntry>, ManifestError> {
    let records: Vec<ManagedFileRecord> = serde_json::from_str(content)?;
    records
        .into_iter()
        .map(ManagedFileRecord::into_entry)
        .collect()
}

/// Read a manifest file, falling back to the built-in list when `path` is `None`.
pub async fn load_manifest(path: Option<&Path>) -> Result<Vec<ManagedFileEntry>, ManifestError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).await?;
            parse_manifest(&content)
        }
        None => Ok(get_managed_files()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_manifest() {
        let entries = parse_manifest(
            r#"[
                {"template": "__gitignore", "destination": ".gitignore", "strategy": "line-union-merge"},
                {"template": "package.json", "strategy": "structured-merge"}
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].destination, Some(PathBuf::from(".gitignore")));
        assert_eq!(entries[0].strategy, MergeStrategy::LineUnionMerge);
        assert_eq!(entries[1].destination, None);
        assert_eq!(entries[1].strategy, MergeStrategy::StructuredMerge);
    }

    #[test]
    fn test_parse_manifest_unknown_strategy_is_fatal() {
        let result = parse_manifest(
            r#"[
                {"template": "a", "strategy": "overwrite"},
                {"template": "b", "strategy": "three-way"}
            ]"#,
        );
        assert!(matches!(result, Err(ManifestError::UnknownStrategy(ref s)) if s == "three-way"));
    }

    #[test]
    fn test_parse_manifest_invalid_json() {
        assert!(matches!(parse_manifest("{"), Err(ManifestError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_load_manifest_defaults_to_built_in() {
        let entries = load_manifest(None).await.unwrap();
        assert_eq!(entries, get_managed_files());
    }
}
