//! pubcheck - outdated dependency checker library
//!
//! This library provides the core functionality for checking the
//! dependencies of a Dart/Flutter pubspec.yaml against pub.dev:
//! - Manifest loading and dependency classification
//! - pub.dev latest-version lookups
//! - Semver comparison and report formatting

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
