//! Aggregated result of checking a manifest

use super::{DependencyOutcome, OutdatedPackage, SkipReason};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All outcomes for one manifest, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Path of the checked manifest, if it came from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    /// Outcomes in manifest order
    pub outcomes: Vec<DependencyOutcome>,
}

impl CheckReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the manifest path (builder pattern)
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Add an outcome
    pub fn push(&mut self, outcome: DependencyOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outdated packages, in manifest order
    pub fn outdated(&self) -> impl Iterator<Item = &OutdatedPackage> {
        self.outcomes.iter().filter_map(DependencyOutcome::as_outdated)
    }

    /// Skipped dependencies with their reasons, in manifest order
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.skip_reason().map(|r| (o.name(), r)))
    }

    /// Names of dependencies that are already current
    pub fn up_to_date(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            DependencyOutcome::UpToDate { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Number of outdated packages
    pub fn outdated_count(&self) -> usize {
        self.outdated().count()
    }

    /// Returns true if nothing is outdated
    pub fn is_up_to_date(&self) -> bool {
        self.outdated_count() == 0
    }
}
