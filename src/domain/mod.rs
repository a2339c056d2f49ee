//! Core domain models for pubcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Version specification for simple dependencies
//! - Dependency declarations and their sources
//! - Per-dependency outcomes and the aggregated report

mod dependency;
mod outcome;
mod report;
mod version_spec;

pub use dependency::{Dependency, DependencySource};
pub use outcome::{DependencyOutcome, OutdatedPackage, SkipReason};
pub use report::CheckReport;
pub use version_spec::VersionSpec;
