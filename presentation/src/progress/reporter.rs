//! Spinner shown while the backend is producing a turn or the feedback report

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Thin wrapper over an `indicatif` spinner that can be disabled.
pub struct ThinkingSpinner {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ThinkingSpinner {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Hidden spinner for quiet mode and tests.
    pub fn hidden() -> Self {
        Self::new(false)
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn start(&mut self, message: impl Into<String>) {
        self.finish();
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
