//! Batch progress display for solving several maze images

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maze files of a batch have been handled
pub struct ProgressManager {
    bar: ProgressBar,
    solved: usize,
    unsolved: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; [`ProgressManager::initialize`] sizes it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            solved: 0,
            unsolved: 0,
        }
    }

    /// Show a bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
        self.solved = 0;
        self.unsolved = 0;
    }

    /// Display the file currently being solved
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count a finished file and advance the bar
    pub fn complete_file(&mut self, solved: bool) {
        if solved {
            self.solved += 1;
        } else {
            self.unsolved += 1;
        }
        self.bar.inc(1);
    }

    /// Number of files finished with a path to the exit
    pub const fn solved(&self) -> usize {
        self.solved
    }

    /// Number of files finished without a path to the exit
    pub const fn unsolved(&self) -> usize {
        self.unsolved
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} solved, {} without a path",
            self.solved, self.unsolved
        ));
    }
}
