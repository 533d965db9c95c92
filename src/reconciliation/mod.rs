//! Reconciliation of managed files with their latest templates.
//!
//! The engine is a pure transform: snapshots in, merged contents out.
//! Reading templates and existing files is the snapshot provider's job and
//! writing results is the writer's.

mod engine;
mod types;

pub use engine::reconcile;
pub use types::{
    EntryOutcome, FileSnapshot, MergedResult, ReconcileError, ResolvedSnapshots, SnapshotError,
    SnapshotProvider,
};
