use crate::manifest::{ManagedFileEntry, MergeStrategy};
use crate::merge::MergeError;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Why a snapshot could not be produced for an entry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Failed to render template '{name}': {message}")]
    Render { name: String, message: String },

    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

/// Why a single entry failed to reconcile
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Malformed(#[from] MergeError),
}

/// The inputs to one merge: what the user has and what the template says.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSnapshot {
    pub destination: PathBuf,
    /// Absent when the destination does not exist yet
    pub existing_text: Option<String>,
    pub replacement_text: String,
}

/// Merged content ready to hand to the writer
#[derive(Debug, Clone, PartialEq)]
pub struct MergedResult {
    pub destination: PathBuf,
    pub content: String,
    /// False when the merged content equals what is already on disk
    pub changed: bool,
}

/// Result of reconciling one manifest entry
#[derive(Debug)]
pub struct EntryOutcome {
    pub template_name: String,
    pub strategy: MergeStrategy,
    pub result: Result<MergedResult, ReconcileError>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Supplies the snapshot for a manifest entry.
pub trait SnapshotProvider {
    fn snapshot(&self, entry: &ManagedFileEntry) -> Result<FileSnapshot, SnapshotError>;
}

impl<F> SnapshotProvider for F
where
    F: Fn(&ManagedFileEntry) -> Result<FileSnapshot, SnapshotError>,
{
    fn snapshot(&self, entry: &ManagedFileEntry) -> Result<FileSnapshot, SnapshotError> {
        self(entry)
    }
}

/// Snapshots resolved ahead of time, keyed by template name
#[derive(Debug, Clone, Default)]
pub struct ResolvedSnapshots {
    snapshots: HashMap<String, Result<FileSnapshot, SnapshotError>>,
}

impl ResolvedSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template_name: impl Into<String>, snapshot: Result<FileSnapshot, SnapshotError>) {
        self.snapshots.insert(template_name.into(), snapshot);
    }
}

impl SnapshotProvider for ResolvedSnapshots {
    fn snapshot(&self, entry: &ManagedFileEntry) -> Result<FileSnapshot, SnapshotError> {
        self.snapshots
            .get(&entry.template_name)
            .cloned()
            .unwrap_or_else(|| Err(SnapshotError::TemplateNotFound(entry.template_name.clone())))
    }
}
