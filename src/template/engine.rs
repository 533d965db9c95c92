use handlebars::Handlebars;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

use super::types::TemplateError;
use crate::config::Answers;
use crate::manifest::ManagedFileEntry;
use crate::reconciliation::{FileSnapshot, ResolvedSnapshots, SnapshotError};

/// Renders the generator's templates and pairs them with the project's
/// current files.
pub struct TemplateSource {
    handlebars: Handlebars<'static>,
    templates_dir: PathBuf,
}

impl TemplateSource {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        let mut handlebars = Handlebars::new();
        // Templates are source files, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        Self {
            handlebars,
            templates_dir: templates_dir.into(),
        }
    }

    /// List every template file, relative to the template directory, using
    /// `/` as the separator.
    pub fn index_templates(&self) -> HashSet<String> {
        let mut names = HashSet::new();

        if !self.templates_dir.exists() {
            return names;
        }

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Ok(relative) = entry.path().strip_prefix(&self.templates_dir) {
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                names.insert(name);
            }
        }

        names
    }

    /// Load a template's raw text by name
    pub async fn load_template(&self, template_name: &str) -> Result<String, TemplateError> {
        let template_path = self.templates_dir.join(template_name);

        if template_path.is_file() {
            let content = fs::read_to_string(&template_path).await?;
            Ok(content)
        } else {
            Err(TemplateError::TemplateNotFound(template_name.to_string()))
        }
    }

    /// Render template text against the answers context
    pub fn render(&self, template: &str, context: &Map<String, Value>) -> Result<String, TemplateError> {
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::from)
    }

    /// Produce a snapshot for every entry.
    ///
    /// Failures are stored per entry so that the engine can report them
    /// without stopping the run.
    pub async fn resolve(
        &self,
        project_root: &Path,
        entries: &[ManagedFileEntry],
        answers: &Answers,
    ) -> ResolvedSnapshots {
        let available = self.index_templates();
        let context = answers.to_context();
        let mut snapshots = ResolvedSnapshots::new();

        for entry in entries {
            let snapshot = if available.contains(&entry.template_name) {
                self.snapshot_entry(project_root, entry, &context).await
            } else {
                Err(SnapshotError::TemplateNotFound(entry.template_name.clone()))
            };
            snapshots.insert(entry.template_name.clone(), snapshot);
        }

        snapshots
    }

    async fn snapshot_entry(
        &self,
        project_root: &Path,
        entry: &ManagedFileEntry,
        context: &Map<String, Value>,
    ) -> Result<FileSnapshot, SnapshotError> {
        let render_error = |e: TemplateError| SnapshotError::Render {
            name: entry.template_name.clone(),
            message: e.to_string(),
        };

        let template = self
            .load_template(&entry.template_name)
            .await
            .map_err(render_error)?;
        let replacement_text = self.render(&template, context).map_err(render_error)?;

        let destination = entry.destination_path(project_root);
        let existing_text = read_existing(&destination).await?;

        debug!(
            template = %entry.template_name,
            destination = %destination.display(),
            exists = existing_text.is_some(),
            "Resolved template snapshot"
        );

        Ok(FileSnapshot {
            destination,
            existing_text,
            replacement_text,
        })
    }
}

async fn read_existing(path: &Path) -> Result<Option<String>, SnapshotError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SnapshotError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes_answers() {
        let source = TemplateSource::new("/templates");
        let mut context = Map::new();
        context.insert("name".to_string(), json!("my-lib"));

        let rendered = source
            .render(r#"{"name": "{{name}}"}"#, &context)
            .unwrap();
        assert_eq!(rendered, r#"{"name": "my-lib"}"#);
    }

    #[test]
    fn test_render_does_not_escape() {
        let source = TemplateSource::new("/templates");
        let mut context = Map::new();
        context.insert("glob".to_string(), json!("<src>/**/*.ts & 'x'"));

        assert_eq!(
            source.render("{{glob}}", &context).unwrap(),
            "<src>/**/*.ts & 'x'"
        );
    }

    #[test]
    fn test_render_reports_invalid_template() {
        let source = TemplateSource::new("/templates");
        assert!(source.render("{{#if}}", &Map::new()).is_err());
    }

    #[test]
    fn test_index_missing_directory_is_empty() {
        let source = TemplateSource::new("/definitely/not/a/templates/dir");
        assert!(source.index_templates().is_empty());
    }
}
