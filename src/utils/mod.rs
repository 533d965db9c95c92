use std::path::{Path, PathBuf};

/// Default name of the answers record written when the project was generated
pub const ANSWERS_FILE: &str = ".erector";

/// Get the path to the answers record
pub fn get_answers_path(project_path: &Path, answers_file: &str) -> PathBuf {
    project_path.join(answers_file)
}

/// Get current timestamp in ISO 8601 format
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_answers_path() {
        assert_eq!(
            get_answers_path(Path::new("/project"), ANSWERS_FILE),
            Path::new("/project/.erector")
        );
    }
}
