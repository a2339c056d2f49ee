//! Manifest loading
//!
//! This module provides functionality to:
//! - Read a pubspec.yaml from disk
//! - Classify each declared dependency (simple, git, complex)

mod pubspec;

pub use pubspec::Pubspec;

use crate::error::ManifestError;
use std::path::Path;
use tracing::debug;

/// Read and parse a pubspec.yaml file
pub fn load_pubspec(path: &Path) -> Result<Pubspec, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    let pubspec = Pubspec::parse(&content, path)?;
    debug!(
        "loaded {} with {} dependencies",
        path.display(),
        pubspec.dependencies.len()
    );
    Ok(pubspec)
}
