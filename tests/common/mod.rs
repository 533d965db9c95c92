#![allow(dead_code)]

use async_trait::async_trait;
use scaffold_upgrader::{PackageRegistry, Prompt, SemVer, UpgradeError, VersionError};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a file, creating parent directories
pub async fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .expect("Should create parent directory");
    }
    fs::write(&path, content).await.expect("Should write file");
}

pub async fn read_file(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .await
        .expect("Should read file")
}

/// Registry with fixed versions that records install requests
pub struct FakeRegistry {
    pub latest: SemVer,
    pub installed: SemVer,
    pub installs: Arc<Mutex<Vec<String>>>,
}

impl FakeRegistry {
    pub fn new(installed: SemVer, latest: SemVer) -> Self {
        Self {
            latest,
            installed,
            installs: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PackageRegistry for FakeRegistry {
    async fn latest_version(&self, _package: &str) -> Result<SemVer, VersionError> {
        Ok(self.latest.clone())
    }

    async fn installed_version(&self, _package: &str) -> Result<SemVer, VersionError> {
        Ok(self.installed.clone())
    }

    async fn install(&self, package: &str, version: &SemVer) -> Result<(), VersionError> {
        self.installs
            .lock()
            .unwrap()
            .push(format!("{}@{}", package, version));
        Ok(())
    }
}

/// Prompt that always gives the same answer
pub struct FixedPrompt(pub bool);

#[async_trait]
impl Prompt for FixedPrompt {
    async fn confirm(&self, _question: &str) -> Result<bool, UpgradeError> {
        Ok(self.0)
    }
}
