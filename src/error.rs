//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing pubspec.yaml
//! - RegistryError: Issues with package registry communication (never fatal)
//! - CheckError: Issues while comparing versions

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Version comparison errors
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error, or a document with the wrong shape
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed or returned a non-success status
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry} registry")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors raised while comparing versions
#[derive(Error, Debug)]
pub enum CheckError {
    /// A current or latest version is not valid semver
    #[error("invalid version '{version}' for package '{package}': {message}")]
    InvalidVersion {
        package: String,
        version: String,
        message: String,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl CheckError {
    /// Creates a new InvalidVersion error from a semver parse failure
    pub fn invalid_version(
        package: impl Into<String>,
        version: impl Into<String>,
        source: &semver::Error,
    ) -> Self {
        CheckError::InvalidVersion {
            package: package.into(),
            version: version.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/pubspec.yaml");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("pubspec.yaml"));
    }

    #[test]
    fn test_manifest_error_read_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/to/pubspec.yaml", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read manifest file"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_manifest_error_yaml_parse() {
        let err = ManifestError::yaml_parse_error("/path/to/pubspec.yaml", "did not find key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse YAML"));
        assert!(msg.contains("did not find key"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent_package", "pub.dev");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent_package' not found"));
        assert!(msg.contains("pub.dev"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("http", "pub.dev", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_invalid_response() {
        let err = RegistryError::invalid_response("http", "pub.dev", "missing field `latest`");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid response from pub.dev"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("provider", "pub.dev");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("provider"));
    }

    #[test]
    fn test_check_error_invalid_version() {
        let source = semver::Version::parse("1.0").unwrap_err();
        let err = CheckError::invalid_version("foo", "1.0", &source);
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version '1.0'"));
        assert!(msg.contains("'foo'"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        assert!(app_err.to_string().contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::package_not_found("pkg", "pub.dev").into();
        assert!(app_err.to_string().contains("package 'pkg' not found"));
    }

    #[test]
    fn test_app_error_from_check_error() {
        let source = semver::Version::parse("abc").unwrap_err();
        let app_err: AppError = CheckError::invalid_version("pkg", "abc", &source).into();
        assert!(app_err.to_string().contains("invalid version 'abc'"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
