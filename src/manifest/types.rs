use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::ManifestError;

/// How a managed file is reconciled with its template during an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// The generator fully owns the file; user edits are discarded.
    Overwrite,
    /// Package manifest merge that keeps user-owned fields.
    StructuredMerge,
    /// Union of lines for flat ignore-style files.
    LineUnionMerge,
    /// Fresh template content; no existing file is expected.
    TemplateDefault,
}

impl MergeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Overwrite => "overwrite",
            MergeStrategy::StructuredMerge => "structured-merge",
            MergeStrategy::LineUnionMerge => "line-union-merge",
            MergeStrategy::TemplateDefault => "template-default",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(MergeStrategy::Overwrite),
            "structured-merge" => Ok(MergeStrategy::StructuredMerge),
            "line-union-merge" => Ok(MergeStrategy::LineUnionMerge),
            "template-default" => Ok(MergeStrategy::TemplateDefault),
            other => Err(ManifestError::UnknownStrategy(other.to_string())),
        }
    }
}

/// One row of the managed file manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedFileEntry {
    /// Path of the template, relative to the template directory.
    pub template_name: String,
    /// Destination relative to the project root. Defaults to `template_name`.
    pub destination: Option<PathBuf>,
    pub strategy: MergeStrategy,
}

impl ManagedFileEntry {
    pub fn new(template_name: impl Into<String>, strategy: MergeStrategy) -> Self {
        Self {
            template_name: template_name.into(),
            destination: None,
            strategy,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Resolve where this file lives inside `project_root`.
    pub fn destination_path(&self, project_root: &Path) -> PathBuf {
        match &self.destination {
            Some(destination) => project_root.join(destination),
            None => project_root.join(&self.template_name),
        }
    }
}

/// On-disk form of a manifest entry. The strategy stays a string so that an
/// unknown value is reported as a configuration error rather than a JSON one.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ManagedFileRecord {
    pub template: String,
    #[serde(default)]
    pub destination: Option<String>,
    pub strategy: String,
}

impl ManagedFileRecord {
    pub fn into_entry(self) -> Result<ManagedFileEntry, ManifestError> {
        Ok(ManagedFileEntry {
            template_name: self.template,
            destination: self.destination.map(PathBuf::from),
            strategy: self.strategy.parse()?,
        })
    }
}
