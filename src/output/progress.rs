use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner shown while the calendar request is in flight.
///
/// The spinner is automatically disabled in quiet mode or when stderr is not a TTY.
pub struct FetchSpinner {
    progress_bar: ProgressBar,
}

impl FetchSpinner {
    /// Creates a spinner for fetching `login`'s calendar.
    ///
    /// The spinner outputs to stderr to avoid interfering with stdout output.
    #[must_use]
    pub fn new(login: &str, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(login, quiet, is_tty)
    }

    /// Creates a spinner with explicit visibility control.
    fn new_with_visibility(login: &str, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };
        progress_bar.set_message(format!("Fetching contributions for {login}"));

        Self { progress_bar }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
