//! Version specification for simple pubspec dependencies
//!
//! Handles declarations like:
//! - `1.2.3` (exact)
//! - `^1.2.3` (caret, compared as `1.2.3`)
//!
//! Only a single leading caret is recognized. Any other operator such as
//! `>=1.0.0` or `~1.0.0` stays part of the version literal and will fail
//! semver parsing later on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caret marker stripped from simple version declarations
pub const CARET: char = '^';

/// A version specification with its original string representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    /// The raw version string as it appears in the manifest
    pub raw: String,
    /// The version literal used for comparison (caret removed)
    pub version: String,
    /// Whether the declaration carried a caret marker
    pub caret: bool,
}

impl VersionSpec {
    /// Parse a simple version declaration, stripping one leading caret
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (version, caret) = match raw.strip_prefix(CARET) {
            Some(rest) => (rest.to_string(), true),
            None => (raw.clone(), false),
        };

        Self {
            raw,
            version,
            caret,
        }
    }

    /// Parse the version literal as semver
    pub fn semver(&self) -> Result<semver::Version, semver::Error> {
        semver::Version::parse(&self.version)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
