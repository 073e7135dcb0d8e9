use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Indeterminate spinner for a single stretching run.
///
/// High iteration counts can take seconds to minutes, and the loop offers no
/// intermediate progress to report, so only elapsed time is shown.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Result<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({elapsed})")?);
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(Duration::from_millis(100));

        Ok(Self { bar })
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
