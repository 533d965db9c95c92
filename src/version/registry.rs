//! Package registry access for the generator package.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use super::types::{SemVer, VersionError};

/// Source of truth for the generator's released and installed versions.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Latest version published to the registry.
    async fn latest_version(&self, package: &str) -> Result<SemVer, VersionError>;

    /// Version installed in the current project.
    async fn installed_version(&self, package: &str) -> Result<SemVer, VersionError>;

    /// Install `version` of `package` as a development dependency.
    async fn install(&self, package: &str, version: &SemVer) -> Result<(), VersionError>;
}

static PACKAGE_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[\s/])(@?[^\s@]+)@(\S+)").expect("package spec pattern is valid"));

/// Pull the installed version of `package` out of an `npm list` listing.
pub fn parse_installed_version(listing: &str, package: &str) -> Result<SemVer, VersionError> {
    let version = listing
        .lines()
        .flat_map(|line| PACKAGE_SPEC.captures_iter(line))
        .find(|caps| &caps[1] == package)
        .map(|caps| caps[2].to_string());

    match version.as_deref() {
        None | Some("(empty)") => Err(VersionError::NotInstalled(package.to_string())),
        Some(version) => SemVer::parse(version),
    }
}

/// Registry backed by the `npm` command line.
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    npm: String,
}

impl NpmRegistry {
    pub fn new() -> Self {
        let npm = if cfg!(windows) { "npm.cmd" } else { "npm" };
        Self {
            npm: npm.to_string(),
        }
    }

    pub fn with_command(npm: impl Into<String>) -> Self {
        Self { npm: npm.into() }
    }

    /// Run the package manager and return its trimmed stdout.
    ///
    /// A non-zero exit is an error unless `allow_failure` is set.
    async fn execute(&self, args: &[&str], allow_failure: bool) -> Result<String, VersionError> {
        let command = format!("{} {}", self.npm, args.join(" "));
        debug!(command = %command, "Running package manager");

        let output = Command::new(&self.npm)
            .args(args)
            .output()
            .await
            .map_err(|e| VersionError::Command {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() && !allow_failure {
            return Err(VersionError::Command {
                command,
                message: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRegistry for NpmRegistry {
    async fn latest_version(&self, package: &str) -> Result<SemVer, VersionError> {
        let output = self.execute(&["show", package, "version"], false).await?;
        SemVer::parse(&output)
    }

    async fn installed_version(&self, package: &str) -> Result<SemVer, VersionError> {
        // npm list exits non-zero on extraneous or peer warnings; the listing is still usable
        let output = self.execute(&["list", "--depth=0", package], true).await?;
        parse_installed_version(&output, package)
    }

    async fn install(&self, package: &str, version: &SemVer) -> Result<(), VersionError> {
        let spec = format!("{}@{}", package, version);
        self.execute(&["i", "-D", &spec], false).await?;
        Ok(())
    }
}
