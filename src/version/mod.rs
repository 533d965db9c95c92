//! Version management for the generator package.
//!
//! This module provides semantic versioning support, version comparison,
//! and the registry lookups used to decide whether a newer generator
//! release should be installed before upgrading a project.

mod registry;
mod types;

pub use registry::{parse_installed_version, NpmRegistry, PackageRegistry};
pub use types::{SemVer, VersionComparison, VersionError};

use tracing::info;

/// Compare the installed generator version against the latest release.
pub fn compare_versions(installed: &SemVer, latest: &SemVer) -> VersionComparison {
    match installed.cmp(latest) {
        std::cmp::Ordering::Equal => VersionComparison::Equal,
        std::cmp::Ordering::Less => VersionComparison::InstalledBehind,
        std::cmp::Ordering::Greater => VersionComparison::InstalledAhead,
    }
}

/// Check whether a newer release of `package` is available.
///
/// Returns the version to install, or `None` when the installed version is
/// already current.
pub async fn check_for_update<R>(registry: &R, package: &str) -> Result<Option<SemVer>, VersionError>
where
    R: PackageRegistry + ?Sized,
{
    info!(package = %package, "Identifying the newest generator version");
    let latest = registry.latest_version(package).await?;

    info!(package = %package, "Identifying the installed generator version");
    let installed = registry.installed_version(package).await?;

    let comparison = compare_versions(&installed, &latest);
    let update = comparison == VersionComparison::InstalledBehind;

    info!(
        installed = %installed,
        latest = %latest,
        update,
        "Generator version check complete"
    );

    Ok(update.then_some(latest))
}
