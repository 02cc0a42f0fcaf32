//! Progress reporting for turns in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the board deliberates (moderator call plus the
/// optional persona reply).
pub struct DeliberationSpinner {
    bar: Option<ProgressBar>,
}

impl DeliberationSpinner {
    /// Start the spinner. With `enabled = false` this is a no-op handle,
    /// so call sites don't branch.
    pub fn start(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("spinner template is valid"),
        );
        bar.set_message("La junta está deliberando...");
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
