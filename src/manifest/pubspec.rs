//! pubspec.yaml parser
//!
//! Reads the top-level `dependencies` mapping, keeping declaration order.
//! Every other key of the document is ignored.

use crate::domain::Dependency;
use crate::error::ManifestError;
use serde_norway::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Key holding the package name
const NAME_KEY: &str = "name";

/// Key holding the dependencies we check
const DEPENDENCIES_KEY: &str = "dependencies";

/// Key marking a git-sourced dependency
const GIT_KEY: &str = "git";

/// Parsed pubspec.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pubspec {
    /// Package name from the `name` key, if present
    pub name: Option<String>,
    /// Dependencies in declaration order
    pub dependencies: Vec<Dependency>,
}

impl Pubspec {
    /// Parse pubspec content. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let doc: Value = serde_norway::from_str(content)
            .map_err(|e| ManifestError::yaml_parse_error(path, e.to_string()))?;

        let root = doc.as_mapping().ok_or_else(|| {
            ManifestError::yaml_parse_error(path, "expected a mapping at the document root")
        })?;

        let name = root.get(NAME_KEY).and_then(Value::as_str).map(str::to_string);

        let dependencies = match root.get(DEPENDENCIES_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Mapping(deps)) => parse_dependencies(deps),
            Some(_) => {
                return Err(ManifestError::yaml_parse_error(
                    path,
                    "`dependencies` must be a mapping",
                ))
            }
        };

        Ok(Self { name, dependencies })
    }
}

/// Classify each entry of the `dependencies` mapping
fn parse_dependencies(deps: &Mapping) -> Vec<Dependency> {
    let mut result = Vec::with_capacity(deps.len());

    for (key, value) in deps {
        let Some(name) = key.as_str() else {
            debug!("ignoring dependency with non-string name: {:?}", key);
            continue;
        };

        match value {
            Value::String(version) => result.push(Dependency::simple(name, version.as_str())),
            Value::Mapping(map) => {
                if let Some(git) = map.get(GIT_KEY) {
                    result.push(Dependency::git(name, git_url(git)));
                } else {
                    result.push(Dependency::complex(name));
                }
            }
            other => {
                debug!("ignoring dependency '{}' with unsupported value: {:?}", name, other);
            }
        }
    }

    result
}

/// Read the repository URL from either `git: <url>` or `git: { url: <url> }`
fn git_url(git: &Value) -> Option<String> {
    match git {
        Value::String(url) => Some(url.clone()),
        Value::Mapping(map) => map.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
