//! Progress display while checking dependencies
//!
//! Provides visual feedback on stderr using indicatif. All methods take
//! `&self` so concurrent lookups can report through a shared reference.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the check workflow
pub struct Progress {
    /// Whether progress display is enabled (disabled in quiet/json mode)
    enabled: bool,
    /// Underlying bar; hidden when disabled
    bar: ProgressBar,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        Self { enabled, bar }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Start a progress bar for a known number of items
    pub fn start(&self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .map(|s| s.progress_chars("█▓▒░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        self.bar.set_style(style);
        self.bar.set_length(total);
        self.bar.set_position(0);
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Update the message shown next to the bar
    pub fn set_message(&self, message: &str) {
        if self.enabled {
            self.bar.set_message(message.to_string());
        }
    }

    /// Advance the bar by one item
    pub fn inc(&self) {
        if self.enabled {
            self.bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish_and_clear(&self) {
        if self.enabled {
            self.bar.finish_and_clear();
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::disabled()
    }
}
