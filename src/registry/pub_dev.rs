//! pub.dev API adapter
//!
//! Fetches the latest published version of a Dart/Flutter package.
//! API endpoint: https://pub.dev/api/packages/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, LatestRelease, RegistryAdapter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// pub.dev base URL
pub const PUB_DEV_URL: &str = "https://pub.dev";

/// pub.dev adapter
pub struct PubDevAdapter {
    client: HttpClient,
    base_url: String,
}

/// pub.dev package response (only the fields we read)
#[derive(Debug, Deserialize)]
struct PubPackageResponse {
    /// Latest stable version
    latest: PubVersion,
}

/// A single version entry
#[derive(Debug, Deserialize)]
struct PubVersion {
    /// Version number
    version: String,
    /// RFC 3339 publish timestamp
    #[serde(default)]
    published: Option<String>,
}

impl PubDevAdapter {
    /// Create a new adapter pointing at a mirror (or a test server)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/api/packages/{}", self.base_url, package)
    }
}

#[async_trait]
impl RegistryAdapter for PubDevAdapter {
    fn registry_name(&self) -> &'static str {
        "pub.dev"
    }

    async fn fetch_latest(&self, package: &str) -> Result<LatestRelease, RegistryError> {
        let url = self.build_url(package);
        let response: PubPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        let published = response
            .latest
            .published
            .and_then(|p| p.parse::<DateTime<Utc>>().ok());

        Ok(LatestRelease::new(response.latest.version).with_published(published))
    }
}
