// Progress notice shown while a bucket is being scanned
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::AggregateStats;
use indicatif::{
    ProgressBar,
    ProgressDrawTarget,
    ProgressStyle,
};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Advisory progress display for a scan.
///
/// The spinner draws to stderr on its own ticker thread, so updating it
/// never blocks the listing. It is hidden when stderr isn't a terminal.
#[derive(Debug)]
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// A spinner drawing to stderr.
    pub fn spinner() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

        // Keep the default style if the template doesn't parse.
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }

        Self {
            bar: Some(bar),
        }
    }

    /// A `Progress` that never displays anything.
    pub fn hidden() -> Self {
        Self {
            bar: None,
        }
    }

    /// Show the notice that a scan is starting.
    pub fn start(&self, bucket: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!(
                "Scanning '{}', this may take some time...",
                bucket,
            ));
            bar.enable_steady_tick(TICK_INTERVAL);
        }
    }

    /// Update the running totals after a page has been processed.
    pub fn update(&self, pages: u64, stats: &AggregateStats) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!(
                "Scanned {} page(s): {} current, {} non-current, {} delete markers",
                pages,
                stats.current_object_count,
                stats.versioned_object_count,
                stats.delete_marker_count,
            ));
        }
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Returns `true` if this `Progress` can display anything.
    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

impl Drop for Progress {
    // Make sure an aborted scan doesn't leave the spinner behind.
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress() {
        let progress = Progress::hidden();

        progress.start("demo");
        progress.update(1, &AggregateStats::default());
        progress.finish();

        assert!(!progress.is_visible());
    }

    #[test]
    fn test_spinner_progress() {
        let progress = Progress::spinner();

        assert!(progress.is_visible());
    }
}
