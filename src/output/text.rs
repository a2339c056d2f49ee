//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Skip notices for git and complex dependencies
//! - The outdated package list, or the all-up-to-date message
//! - Semantic version change type indication (verbose only)
//! - Packages whose latest version could not be determined (verbose only)

use crate::domain::{CheckReport, OutdatedPackage, SkipReason};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Same numbers, different pre-release
    Prerelease,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (semver::Version::parse(old), semver::Version::parse(new)) {
            (Ok(old), Ok(new)) => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else if new.patch != old.patch {
                    VersionChangeType::Patch
                } else {
                    VersionChangeType::Prerelease
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Prerelease => "pre".cyan().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Prerelease => "pre",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter without colors
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_color(verbosity, false)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a single skip notice. Unknown-latest skips are silent here.
    fn format_skip_line(
        &self,
        name: &str,
        reason: &SkipReason,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = match reason {
            SkipReason::Git => "Skipping git repository",
            SkipReason::Complex => "Skipping complex dependency",
            SkipReason::LatestUnknown => return Ok(()),
        };

        if self.color {
            writeln!(writer, "{}", format!("{}: {}", label, name).dimmed())
        } else {
            writeln!(writer, "{}: {}", label, name)
        }
    }

    /// Format a single outdated line
    fn format_outdated_line(
        &self,
        pkg: &OutdatedPackage,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let details = if self.verbosity == Verbosity::Verbose {
            let change_type = VersionChangeType::from_versions(&pkg.current, &pkg.latest);
            let label = if self.color {
                change_type.colored_label()
            } else {
                change_type.label().to_string()
            };
            let date = pkg
                .published
                .map(|d| format!(" ({})", d.format("%Y/%m/%d")))
                .unwrap_or_default();
            format!(" [{}]{}", label, date)
        } else {
            String::new()
        };

        if self.color {
            writeln!(
                writer,
                "{}: {} {} {}{}",
                pkg.name.bold(),
                pkg.current.dimmed(),
                "->".dimmed(),
                pkg.latest.bright_white().bold(),
                details
            )
        } else {
            writeln!(
                writer,
                "{}: {} -> {}{}",
                pkg.name, pkg.current, pkg.latest, details
            )
        }
    }

    /// List packages whose latest version is unknown
    fn format_unknown(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let unknown: Vec<_> = report
            .skipped()
            .filter(|(_, reason)| **reason == SkipReason::LatestUnknown)
            .map(|(name, _)| name)
            .collect();

        if unknown.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "Could not determine latest version:")?;
        for name in unknown {
            writeln!(writer, "  {}", name)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for (name, reason) in report.skipped() {
            self.format_skip_line(name, reason, writer)?;
        }

        if report.is_up_to_date() {
            if self.color {
                writeln!(writer, "{}", "All packages are up to date!".green())?;
            } else {
                writeln!(writer, "All packages are up to date!")?;
            }
        } else {
            if self.color {
                writeln!(writer, "{}", "Outdated packages:".yellow().bold())?;
            } else {
                writeln!(writer, "Outdated packages:")?;
            }
            for pkg in report.outdated() {
                self.format_outdated_line(pkg, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_unknown(report, writer)?;
        }

        Ok(())
    }
}
