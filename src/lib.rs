pub mod config;
pub mod manifest;
pub mod merge;
pub mod reconciliation;
pub mod template;
pub mod upgrade;
pub mod utils;
pub mod version;

// Re-export commonly used types
pub use config::{read_answers, Answer, Answers, ConfigError, UpgradeConfig};
pub use manifest::{get_managed_files, load_manifest, ManagedFileEntry, ManifestError, MergeStrategy};
pub use merge::{apply_strategy, merge_lines, merge_structured, MergeError, USER_OWNED_FIELDS};
pub use reconciliation::{
    reconcile, EntryOutcome, FileSnapshot, MergedResult, ReconcileError, SnapshotError,
    SnapshotProvider,
};
pub use template::{TemplateError, TemplateSource, TemplateWriter, WriteOutcome};
pub use upgrade::{
    AssumeYes, DialoguerPrompt, Prompt, UpgradeError, UpgradeOutcome, UpgradeReport, Upgrader,
};
pub use version::{compare_versions, NpmRegistry, PackageRegistry, SemVer, VersionComparison, VersionError};
