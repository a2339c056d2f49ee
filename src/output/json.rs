//! JSON output formatter for machine processing

use crate::domain::{CheckReport, SkipReason};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Path to the checked manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<String>,
    /// Outdated packages in manifest order
    outdated: Vec<JsonOutdated>,
    /// Skipped dependencies in manifest order
    skipped: Vec<JsonSkip>,
    /// Names of up-to-date packages (verbose only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    up_to_date: Vec<String>,
}

/// JSON representation of an outdated package
#[derive(Serialize)]
struct JsonOutdated {
    /// Package name
    name: String,
    /// Declared version
    current: String,
    /// Latest version
    latest: String,
    /// Publish date of the latest version (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    published: Option<String>,
}

/// JSON representation of a skip
#[derive(Serialize)]
struct JsonSkip {
    /// Package name
    name: String,
    /// Skip reason
    reason: String,
}

impl JsonFormatter {
    /// Convert skip reason to string
    fn skip_reason_to_string(reason: &SkipReason) -> String {
        match reason {
            SkipReason::Git => "git".to_string(),
            SkipReason::Complex => "complex".to_string(),
            SkipReason::LatestUnknown => "latest_unknown".to_string(),
        }
    }

    /// Build the serializable view of a report
    fn to_json(&self, report: &CheckReport) -> JsonOutput {
        let verbose = self.verbosity == Verbosity::Verbose;

        let outdated = report
            .outdated()
            .map(|pkg| JsonOutdated {
                name: pkg.name.clone(),
                current: pkg.current.clone(),
                latest: pkg.latest.clone(),
                published: if verbose {
                    pkg.published.map(|d| d.to_rfc3339())
                } else {
                    None
                },
            })
            .collect();

        let skipped = report
            .skipped()
            .map(|(name, reason)| JsonSkip {
                name: name.to_string(),
                reason: Self::skip_reason_to_string(reason),
            })
            .collect();

        let up_to_date = if verbose {
            report.up_to_date().map(str::to_string).collect()
        } else {
            Vec::new()
        };

        JsonOutput {
            manifest: report.manifest.as_ref().map(|p| p.display().to_string()),
            outdated,
            skipped,
            up_to_date,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.to_json(report);
        let json = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json)
    }
}
