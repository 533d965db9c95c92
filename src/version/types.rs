//! Version types for semantic versioning support.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Error types for version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("{0} is not installed. Run `npm i -D {0}` to install it")]
    NotInstalled(String),

    #[error("Failed to run {command}: {message}")]
    Command { command: String, message: String },
}

/// Represents a semantic version (major.minor.patch).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    /// Create a new SemVer instance.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string (e.g., "1.2.3") into a SemVer.
    ///
    /// A leading `v` and any pre-release or build suffix (`-beta.1`,
    /// `+sha`) are ignored.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidFormat(s.to_string());

        let core = s.trim().trim_start_matches('v');
        let core = core.split(['-', '+']).next().unwrap_or(core);
        let numbers = core
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match numbers[..] {
            [major, minor, patch] => Ok(Self::new(major, minor, patch)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of comparing the installed generator against the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionComparison {
    /// Installed version is the latest.
    Equal,
    /// A newer release is available.
    InstalledBehind,
    /// Installed version is newer than the registry's latest.
    InstalledAhead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semver_parse_valid() {
        let v = SemVer::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_semver_parse_zero() {
        let v = SemVer::parse("0.0.0").unwrap();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, 0);
    }

    #[test]
    fn test_semver_parse_invalid_format() {
        assert!(SemVer::parse("1.2").is_err());
        assert!(SemVer::parse("1").is_err());
        assert!(SemVer::parse("1.2.3.4").is_err());
        assert!(SemVer::parse("").is_err());
    }

    #[test]
    fn test_semver_parse_ignores_prefix_and_suffix() {
        assert_eq!(SemVer::parse("v1.2.3").unwrap(), SemVer::new(1, 2, 3));
        assert_eq!(SemVer::parse("1.2.3-beta.4").unwrap(), SemVer::new(1, 2, 3));
        assert_eq!(SemVer::parse("1.2.3+abc\n").unwrap(), SemVer::new(1, 2, 3));
    }

    #[test]
    fn test_semver_parse_invalid_number() {
        assert!(SemVer::parse("a.b.c").is_err());
        assert!(SemVer::parse("1.2.x").is_err());
    }

    #[test]
    fn test_semver_display() {
        let v = SemVer::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_semver_comparison() {
        let v1 = SemVer::new(1, 0, 0);
        let v2 = SemVer::new(2, 0, 0);
        let v3 = SemVer::new(1, 1, 0);
        let v4 = SemVer::new(1, 0, 1);
        let v5 = SemVer::new(1, 0, 0);

        assert!(v1 < v2);
        assert!(v1 < v3);
        assert!(v1 < v4);
        assert!(v1 == v5);
        assert!(v3 < v2);
        assert!(v4 < v3);
    }
}
