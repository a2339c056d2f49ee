//! Outdated-dependency check
//!
//! This module provides:
//! - Classification dispatch for each declared dependency
//! - Registry lookups for simple dependencies (optionally concurrent)
//! - Version judgment producing an ordered CheckReport
//!
//! Nothing here prints; formatting lives in `output`.

mod judge;

pub use judge::judge;

use crate::domain::{CheckReport, Dependency, DependencyOutcome, DependencySource, SkipReason};
use crate::error::CheckError;
use crate::manifest::Pubspec;
use crate::progress::Progress;
use crate::registry::RegistryAdapter;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

/// Default number of registry lookups in flight
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Checks every dependency of a manifest against a registry
pub struct Checker<'a> {
    /// Registry used for latest-version lookups
    registry: &'a dyn RegistryAdapter,
    /// Maximum concurrent lookups
    concurrency: usize,
    /// Progress reporter
    progress: Progress,
}

impl<'a> Checker<'a> {
    /// Create a sequential checker
    pub fn new(registry: &'a dyn RegistryAdapter) -> Self {
        Self {
            registry,
            concurrency: DEFAULT_CONCURRENCY,
            progress: Progress::disabled(),
        }
    }

    /// Allow up to `concurrency` lookups at once (at least one)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Report progress while checking
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Check all dependencies, keeping manifest order in the report.
    ///
    /// An unparseable version aborts the whole check.
    pub async fn check(&self, pubspec: &Pubspec) -> Result<CheckReport, CheckError> {
        let total = pubspec.dependencies.len() as u64;
        self.progress.start(total, "Checking dependencies");

        let result = stream::iter(&pubspec.dependencies)
            .map(|dep| self.check_dependency(dep))
            .buffered(self.concurrency)
            .try_collect::<Vec<_>>()
            .await;

        self.progress.finish_and_clear();

        Ok(CheckReport {
            manifest: None,
            outcomes: result?,
        })
    }

    /// Check a single dependency
    async fn check_dependency(&self, dep: &Dependency) -> Result<DependencyOutcome, CheckError> {
        let outcome = match &dep.source {
            DependencySource::Simple(spec) => {
                self.progress.set_message(&format!("Checking {}", dep.name));

                match self.registry.lookup_latest_version(&dep.name).await {
                    Some(latest) if latest.version.is_empty() => {
                        debug!(
                            "{} returned an empty version for {}",
                            self.registry.registry_name(),
                            dep.name
                        );
                        DependencyOutcome::skipped(&dep.name, SkipReason::LatestUnknown)
                    }
                    Some(latest) => {
                        let outcome = judge(&dep.name, spec, &latest)?;
                        debug!("{}: {} vs latest {}", dep.name, spec.version, latest.version);
                        outcome
                    }
                    None => DependencyOutcome::skipped(&dep.name, SkipReason::LatestUnknown),
                }
            }
            DependencySource::Git { .. } => {
                debug!("skipping git dependency {}", dep);
                DependencyOutcome::skipped(&dep.name, SkipReason::Git)
            }
            DependencySource::Complex => {
                debug!("skipping complex dependency {}", dep.name);
                DependencyOutcome::skipped(&dep.name, SkipReason::Complex)
            }
        };

        self.progress.inc();
        Ok(outcome)
    }
}
