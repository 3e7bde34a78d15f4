use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn spinner(description: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()));
        bar.set_message(description.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        ProgressTracker {
            bar,
        }
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    pub fn finish_with(&self, msg: &str) {
        self.bar.finish_with_message(msg.to_string());
    }
}
