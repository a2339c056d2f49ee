//! Registry adapters for fetching package version information
//!
//! This module provides:
//! - HTTP client shared foundation with optional retry
//! - pub.dev API adapter

mod client;
mod pub_dev;

pub use client::{HttpClient, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use pub_dev::{PubDevAdapter, PUB_DEV_URL};

use crate::error::RegistryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The latest published version of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestRelease {
    /// The version string (e.g., "1.2.3")
    pub version: String,
    /// When this version was published, if known
    pub published: Option<DateTime<Utc>>,
}

impl LatestRelease {
    /// Create a new LatestRelease without a publish date
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            published: None,
        }
    }

    /// Set the publish date (builder pattern)
    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }
}

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version of a package (one request)
    async fn fetch_latest(&self, package: &str) -> Result<LatestRelease, RegistryError>;

    /// Look up the latest published version of a package.
    ///
    /// Every registry error is absorbed into `None`; the reason only goes
    /// to the debug log.
    async fn lookup_latest_version(&self, package: &str) -> Option<LatestRelease> {
        match self.fetch_latest(package).await {
            Ok(release) => Some(release),
            Err(e) => {
                debug!("latest version of {} unknown: {}", package, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Adapter that knows one version, or fails like an unreachable host
    struct FixedRegistry(Option<&'static str>);

    #[async_trait]
    impl RegistryAdapter for FixedRegistry {
        fn registry_name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_latest(&self, package: &str) -> Result<LatestRelease, RegistryError> {
            match self.0 {
                Some(version) => Ok(LatestRelease::new(version)),
                None => Err(RegistryError::network_error(
                    package,
                    "fixed",
                    "connection refused",
                )),
            }
        }
    }

    #[test]
    fn test_latest_release_new() {
        let release = LatestRelease::new("1.2.3");
        assert_eq!(release.version, "1.2.3");
        assert!(release.published.is_none());
    }

    #[test]
    fn test_latest_release_with_published() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let release = LatestRelease::new("1.2.3").with_published(Some(date));
        assert_eq!(release.published, Some(date));
    }

    #[tokio::test]
    async fn test_lookup_latest_version_present() {
        let registry = FixedRegistry(Some("2.0.0"));
        assert_eq!(
            registry.lookup_latest_version("foo").await,
            Some(LatestRelease::new("2.0.0"))
        );
    }

    #[tokio::test]
    async fn test_lookup_latest_version_absorbs_errors() {
        let unreachable = FixedRegistry(None);
        assert!(unreachable.fetch_latest("foo").await.is_err());
        assert!(unreachable.lookup_latest_version("foo").await.is_none());
    }
}
