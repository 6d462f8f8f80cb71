use indicatif::{ProgressBar, ProgressStyle};

/// Byte-oriented progress bar used while downloading
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Progress bar for a transfer of known size; `None` falls back to a spinner
    pub fn new(total: Option<u64>, description: &str) -> Self {
        let bar = match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta}) {msg}")
                {
                    bar.set_style(style.progress_chars("#>-"));
                }
                bar
            }
            None => ProgressBar::new_spinner(),
        };
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
        }
    }

    /// Tracker that draws nothing
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
    }

    pub fn abandon(&self, msg: &str) {
        self.bar.abandon_with_message(msg.to_string());
    }
}
