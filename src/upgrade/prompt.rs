use async_trait::async_trait;
use dialoguer::Confirm;

use super::UpgradeError;

/// The question asked before any managed file is touched
pub const PROCEED_QUESTION: &str =
    "The following will overwrite some of the files in your project. Would you like to continue (y/N)?";

/// Asks the user a yes/no question.
#[async_trait]
pub trait Prompt: Send + Sync {
    async fn confirm(&self, question: &str) -> Result<bool, UpgradeError>;
}

/// Interactive terminal prompt. Defaults to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

#[async_trait]
impl Prompt for DialoguerPrompt {
    async fn confirm(&self, question: &str) -> Result<bool, UpgradeError> {
        let question = question.to_string();

        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(question)
                .default(false)
                .show_default(false)
                .interact()
        })
        .await
        .map_err(|e| UpgradeError::Prompt(e.to_string()))?
        .map_err(|e| UpgradeError::Prompt(e.to_string()))
    }
}

/// Answers every question with "yes"
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl Prompt for AssumeYes {
    async fn confirm(&self, _question: &str) -> Result<bool, UpgradeError> {
        Ok(true)
    }
}
