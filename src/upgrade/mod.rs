//! Upgrade orchestration.
//!
//! Drives one upgrade run: optional generator version check and install,
//! the confirmation prompt, then resolving, reconciling and writing every
//! managed file. All process and terminal access happens here so that the
//! reconciliation engine stays a pure function.

mod prompt;
mod report;

pub use prompt::{AssumeYes, DialoguerPrompt, Prompt, PROCEED_QUESTION};
pub use report::{FileFailure, UpgradeReport};

use crate::config::{read_answers, Answers, ConfigError, UpgradeConfig};
use crate::manifest::{load_manifest, ManagedFileEntry, ManifestError};
use crate::reconciliation::reconcile;
use crate::template::{TemplateSource, TemplateWriter};
use crate::utils::now_iso;
use crate::version::{check_for_update, PackageRegistry, VersionError};
use thiserror::Error;
use tracing::info;

/// Errors that stop the whole run. Per-file problems end up in the report.
#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Version error: {0}")]
    VersionError(#[from] VersionError),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// How an upgrade run ended
#[derive(Debug)]
pub enum UpgradeOutcome {
    /// The user declined; nothing was written.
    Declined,
    Completed(UpgradeReport),
}

impl UpgradeOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            UpgradeOutcome::Declined => 0,
            UpgradeOutcome::Completed(report) => report.exit_code(),
        }
    }
}

pub struct Upgrader {
    config: UpgradeConfig,
    registry: Box<dyn PackageRegistry>,
    prompt: Box<dyn Prompt>,
    writer: TemplateWriter,
}

impl Upgrader {
    pub fn new(
        config: UpgradeConfig,
        registry: Box<dyn PackageRegistry>,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            config,
            registry,
            prompt,
            writer: TemplateWriter::new(),
        }
    }

    /// Run the full upgrade.
    pub async fn run(&self) -> Result<UpgradeOutcome, UpgradeError> {
        // A bad manifest is a tool misconfiguration; fail before asking anything
        let manifest = load_manifest(self.config.manifest_path.as_deref()).await?;
        // Without the original answers every template would render blank
        let answers = self.load_answers().await?;

        if !self.config.skip_version_check {
            self.update_generator().await?;
        }

        if !self.prompt.confirm(PROCEED_QUESTION).await? {
            info!("Upgrade cancelled");
            return Ok(UpgradeOutcome::Declined);
        }

        let report = self.update_files(&manifest, &answers).await?;
        Ok(UpgradeOutcome::Completed(report))
    }

    async fn load_answers(&self) -> Result<Answers, UpgradeError> {
        let answers = read_answers(&self.config.project_root, &self.config.answers_file)
            .await?
            .ok_or_else(|| {
                ConfigError::AnswersNotFound(
                    self.config.project_root.join(&self.config.answers_file),
                )
            })?;
        Ok(answers)
    }

    /// Install the newest generator release if the project is behind.
    async fn update_generator(&self) -> Result<(), UpgradeError> {
        let package = &self.config.package;

        if let Some(latest) = check_for_update(self.registry.as_ref(), package).await? {
            info!(package = %package, version = %latest, "Installing generator");
            self.registry.install(package, &latest).await?;
        }

        Ok(())
    }

    /// Bring every managed file up to date with its template.
    pub async fn update_files(
        &self,
        manifest: &[ManagedFileEntry],
        answers: &Answers,
    ) -> Result<UpgradeReport, UpgradeError> {
        info!(
            project = %self.config.project_root.display(),
            files = manifest.len(),
            "Updating managed files to latest versions"
        );

        let mut report = UpgradeReport {
            started_at: now_iso(),
            ..Default::default()
        };

        let source = TemplateSource::new(&self.config.templates_dir);
        let snapshots = source
            .resolve(&self.config.project_root, manifest, answers)
            .await;

        let outcomes = reconcile(manifest, &snapshots);
        let to_write = report.record_outcomes(outcomes);

        let writes = self.writer.write_all(&to_write).await;
        report.record_writes(writes);
        report.completed_at = now_iso();

        info!(
            updated = report.updated.len(),
            unchanged = report.unchanged.len(),
            failed = report.failures.len(),
            "Upgrade finished"
        );

        Ok(report)
    }
}
