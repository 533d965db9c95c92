use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of persisting one merged file
#[derive(Debug)]
pub struct WriteOutcome {
    pub destination: PathBuf,
    pub result: Result<(), TemplateError>,
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
