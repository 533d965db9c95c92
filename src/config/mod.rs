use crate::utils::{get_answers_path, ANSWERS_FILE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Default name of the generator package checked against the registry
pub const DEFAULT_PACKAGE: &str = "angular-librarian";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Answers record not found at {}", .0.display())]
    AnswersNotFound(PathBuf),
}

/// One answer captured when the project was first generated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub name: String,
    #[serde(default)]
    pub answer: Value,
}

/// The answers record from the original generation run.
///
/// Read-only: the upgrader passes it through to template rendering so that
/// templates come out the way they did the first time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    answers: Vec<Answer>,
}

impl Answers {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.answers
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.answer)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Build the template rendering context. Later answers override earlier ones.
    pub fn to_context(&self) -> Map<String, Value> {
        self.answers
            .iter()
            .map(|a| (a.name.clone(), a.answer.clone()))
            .collect()
    }
}

/// Read the answers record from the project root
pub async fn read_answers(
    project_path: &Path,
    answers_file: &str,
) -> Result<Option<Answers>, ConfigError> {
    let answers_path = get_answers_path(project_path, answers_file);

    if !answers_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&answers_path).await?;
    let answers: Vec<Answer> = serde_json::from_str(&content)?;
    Ok(Some(Answers::new(answers)))
}

/// Settings for one upgrade run
#[derive(Debug, Clone)]
pub struct UpgradeConfig {
    /// Root of the generated project
    pub project_root: PathBuf,
    /// Directory holding the generator's templates
    pub templates_dir: PathBuf,
    /// Manifest file to use instead of the built-in list
    pub manifest_path: Option<PathBuf>,
    /// Answers record file name, relative to the project root
    pub answers_file: String,
    /// Generator package checked against the registry
    pub package: String,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Do not query or install generator versions
    pub skip_version_check: bool,
}

impl UpgradeConfig {
    pub fn new(project_root: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            templates_dir: templates_dir.into(),
            manifest_path: None,
            answers_file: ANSWERS_FILE.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            assume_yes: false,
            skip_version_check: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answers_to_context() {
        let answers = Answers::new(vec![
            Answer {
                name: "name".to_string(),
                answer: json!("my-lib"),
            },
            Answer {
                name: "packages".to_string(),
                answer: json!(["@angular/core"]),
            },
        ]);

        let context = answers.to_context();
        assert_eq!(context["name"], "my-lib");
        assert_eq!(context["packages"], json!(["@angular/core"]));
        assert_eq!(answers.get("name"), Some(&json!("my-lib")));
        assert_eq!(answers.get("missing"), None);
    }

    #[test]
    fn test_answer_without_value_is_null() {
        let answers: Vec<Answer> = serde_json::from_str(r#"[{"name": "prefix"}]"#).unwrap();
        assert_eq!(answers[0].answer, Value::Null);
    }

    #[test]
    fn test_upgrade_config_defaults() {
        let config = UpgradeConfig::new("/p", "/t");
        assert_eq!(config.package, DEFAULT_PACKAGE);
        assert_eq!(config.answers_file, ".erector");
        assert!(!config.assume_yes);
        assert!(config.manifest_path.is_none());
    }
}
