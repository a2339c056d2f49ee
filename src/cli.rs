//! CLI argument parsing module for pubcheck

use crate::check::DEFAULT_CONCURRENCY;
use crate::registry::PUB_DEV_URL;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Usage line printed when the positional argument count is wrong
pub const USAGE: &str = "Usage: pubcheck <path_to_pubspec.yaml>";

/// Check pubspec.yaml dependencies against the latest versions on pub.dev
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pubcheck",
    version,
    about = "Check pubspec.yaml dependencies for newer versions"
)]
pub struct CliArgs {
    /// Path to pubspec.yaml (exactly one)
    #[arg(num_args = 0..)]
    pub paths: Vec<PathBuf>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (change kinds, dates, debug logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not show the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Registry options
    /// Registry base URL
    #[arg(long, default_value = PUB_DEV_URL)]
    pub registry: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retries on network errors and rate limiting
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Maximum concurrent registry lookups
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
}

impl CliArgs {
    /// The manifest path, if exactly one was given
    pub fn manifest_path(&self) -> Option<&Path> {
        match self.paths.as_slice() {
            [path] => Some(path.as_path()),
            _ => None,
        }
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
