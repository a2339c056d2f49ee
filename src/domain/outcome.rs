//! Per-dependency check outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why a dependency was not compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Declared with a `git` source
    Git,
    /// Declared with some other mapping (path, hosted, sdk, ...)
    Complex,
    /// The registry did not tell us the latest version
    LatestUnknown,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Git => write!(f, "git repository"),
            SkipReason::Complex => write!(f, "complex dependency"),
            SkipReason::LatestUnknown => write!(f, "latest version unknown"),
        }
    }
}

/// A dependency whose latest published version is newer than the declared one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedPackage {
    /// Package name
    pub name: String,
    /// Declared version (caret removed)
    pub current: String,
    /// Latest version in the registry
    pub latest: String,
    /// When the latest version was published, if the registry said so
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
}

impl OutdatedPackage {
    /// Creates a new outdated record
    pub fn new(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            latest: latest.into(),
            published: None,
        }
    }

    /// Sets the publish date (builder pattern)
    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }
}

impl fmt::Display for OutdatedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.current, self.latest)
    }
}

/// Result of checking a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DependencyOutcome {
    /// A newer version exists
    Outdated(OutdatedPackage),
    /// Declared version is the latest, or newer
    UpToDate {
        /// Package name
        name: String,
        /// Declared version (caret removed)
        current: String,
        /// Latest version in the registry
        latest: String,
    },
    /// Dependency was not compared
    Skipped {
        /// Package name
        name: String,
        /// Why it was skipped
        reason: SkipReason,
    },
}

impl DependencyOutcome {
    /// Creates a Skipped outcome
    pub fn skipped(name: impl Into<String>, reason: SkipReason) -> Self {
        DependencyOutcome::Skipped {
            name: name.into(),
            reason,
        }
    }

    /// Returns the package name
    pub fn name(&self) -> &str {
        match self {
            DependencyOutcome::Outdated(pkg) => &pkg.name,
            DependencyOutcome::UpToDate { name, .. } => name,
            DependencyOutcome::Skipped { name, .. } => name,
        }
    }

    /// Returns the outdated record, if any
    pub fn as_outdated(&self) -> Option<&OutdatedPackage> {
        match self {
            DependencyOutcome::Outdated(pkg) => Some(pkg),
            _ => None,
        }
    }

    /// Returns the skip reason, if any
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            DependencyOutcome::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
