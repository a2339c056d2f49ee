//! Dependency information structures

use super::VersionSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a dependency comes from, resolved once when the manifest is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DependencySource {
    /// Plain version string, optionally with a caret
    Simple(VersionSpec),
    /// Mapping with a `git` key
    Git {
        /// Repository URL when it could be read from the declaration
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// Any other mapping (path, hosted, sdk, ...)
    Complex,
}

/// Represents a package dependency declared in pubspec.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Declared source
    pub source: DependencySource,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, source: DependencySource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Creates a simple (registry) dependency from its raw version string
    pub fn simple(name: impl Into<String>, raw_version: impl Into<String>) -> Self {
        Self::new(name, DependencySource::Simple(VersionSpec::parse(raw_version)))
    }

    /// Creates a git-sourced dependency
    pub fn git(name: impl Into<String>, url: Option<String>) -> Self {
        Self::new(name, DependencySource::Git { url })
    }

    /// Creates a complex dependency
    pub fn complex(name: impl Into<String>) -> Self {
        Self::new(name, DependencySource::Complex)
    }

    /// Returns the version spec for simple dependencies
    pub fn version_spec(&self) -> Option<&VersionSpec> {
        match &self.source {
            DependencySource::Simple(spec) => Some(spec),
            _ => None,
        }
    }

    /// Returns true if the registry should be consulted for this dependency
    pub fn is_simple(&self) -> bool {
        matches!(self.source, DependencySource::Simple(_))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            DependencySource::Simple(spec) => write!(f, "{}@{}", self.name, spec),
            DependencySource::Git { url: Some(url) } => write!(f, "{} (git: {})", self.name, url),
            DependencySource::Git { url: None } => write!(f, "{} (git)", self.name),
            DependencySource::Complex => write!(f, "{} (complex)", self.name),
        }
    }
}
