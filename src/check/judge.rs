//! Version comparison for a single simple dependency

use crate::domain::{DependencyOutcome, OutdatedPackage, VersionSpec};
use crate::error::CheckError;
use crate::registry::LatestRelease;
use std::cmp::Ordering;

/// Compare the declared version against the latest release.
///
/// Precedence follows semver: pre-releases sort before their release and
/// build metadata is ignored. Either version failing to parse is an error.
pub fn judge(
    name: &str,
    spec: &VersionSpec,
    latest: &LatestRelease,
) -> Result<DependencyOutcome, CheckError> {
    let current_version = spec
        .semver()
        .map_err(|e| CheckError::invalid_version(name, &spec.version, &e))?;
    let latest_version = semver::Version::parse(&latest.version)
        .map_err(|e| CheckError::invalid_version(name, &latest.version, &e))?;

    if latest_version.cmp_precedence(&current_version) == Ordering::Greater {
        return Ok(DependencyOutcome::Outdated(
            OutdatedPackage::new(name, &spec.version, &latest.version)
                .with_published(latest.published),
        ));
    }

    Ok(DependencyOutcome::UpToDate {
        name: name.to_string(),
        current: spec.version.clone(),
        latest: latest.version.clone(),
    })
}
