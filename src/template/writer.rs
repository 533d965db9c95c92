use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use super::types::{TemplateError, WriteOutcome};
use crate::reconciliation::MergedResult;

/// Persists merged results to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateWriter;

impl TemplateWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write every result, creating parent directories as needed.
    ///
    /// A failed write is recorded and the remaining files are still written.
    pub async fn write_all(&self, results: &[MergedResult]) -> Vec<WriteOutcome> {
        let mut outcomes = Vec::with_capacity(results.len());

        for merged in results {
            let result = write_file(&merged.destination, &merged.content).await;

            match &result {
                Ok(()) => info!(path = %merged.destination.display(), "Updated managed file"),
                Err(e) => warn!(path = %merged.destination.display(), error = %e, "Write failed"),
            }

            outcomes.push(WriteOutcome {
                destination: merged.destination.clone(),
                result,
            });
        }

        outcomes
    }
}

async fn write_file(path: &Path, content: &str) -> Result<(), TemplateError> {
    let to_write_failure = |source| TemplateError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(to_write_failure)?;
    }

    fs::write(path, content).await.map_err(to_write_failure)
}
