use std::io::{self, Write};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

pub struct BatchBar {
    bar: ProgressBar,
    start: Instant,
}

impl BatchBar {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("invalid template")
                .progress_chars("━╸ "),
        );
        Self {
            bar,
            start: Instant::now(),
        }
    }

    pub fn advance(&self, formula: &str) {
        self.bar.set_message(formula.to_string());
        self.bar.inc(1);
    }

    pub fn finish(self, label: &str) {
        self.bar.finish_and_clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.2}s",
            label,
            self.start.elapsed().as_secs_f64()
        );
        let _ = writeln!(stderr);
    }
}

pub enum Progress {
    Interactive(BatchBar),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(BatchBar::new(total))
        } else {
            Self::Silent
        }
    }

    pub fn advance(&self, formula: &str) {
        if let Self::Interactive(bar) = self {
            bar.advance(formula);
        }
    }

    pub fn finish(self, label: &str) {
        if let Self::Interactive(bar) = self {
            bar.finish(label);
        }
    }
}
