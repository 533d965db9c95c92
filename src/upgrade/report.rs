use std::path::PathBuf;

use crate::reconciliation::{EntryOutcome, MergedResult};
use crate::template::WriteOutcome;

/// A managed file that could not be upgraded
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    /// Template name or destination path
    pub file: String,
    pub reason: String,
}

/// Summary of one upgrade run
#[derive(Debug, Clone, Default)]
pub struct UpgradeReport {
    pub started_at: String,
    pub completed_at: String,
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl UpgradeReport {
    /// Record reconciliation outcomes. Returns the results that need writing.
    pub(super) fn record_outcomes(&mut self, outcomes: Vec<EntryOutcome>) -> Vec<MergedResult> {
        let mut to_write = Vec::new();

        for outcome in outcomes {
            match outcome.result {
                Ok(merged) if merged.changed => to_write.push(merged),
                Ok(merged) => self.unchanged.push(merged.destination),
                Err(e) => self.failures.push(FileFailure {
                    file: outcome.template_name,
                    reason: e.to_string(),
                }),
            }
        }

        to_write
    }

    pub(super) fn record_writes(&mut self, writes: Vec<WriteOutcome>) {
        for write in writes {
            match write.result {
                Ok(()) => self.updated.push(write.destination),
                Err(e) => self.failures.push(FileFailure {
                    file: write.destination.display().to_string(),
                    reason: e.to_string(),
                }),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
