//! The end-to-end run: resolve settings, fetch, compute, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::calendar::{CalendarFetcher, DateWindow, HttpClient};
use crate::config::{Config, EnvSource, Overrides, resolve_settings};
use crate::error::{Result, StreakCardError};
use crate::output::{FetchSpinner, render_card};
use crate::streak::{StreakResult, compute_streak};

/// How chatty a run is on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub verbose: u8,
    pub quiet: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub login: String,
    pub output: PathBuf,
    pub days: usize,
    pub streak: StreakResult,
}

impl RunSummary {
    /// One-line summary, e.g. `streak.svg -> current=3, longest=12`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} -> current={}, longest={}",
            self.output.display(),
            self.streak.current,
            self.streak.longest
        )
    }
}

/// Run the whole pipeline for the year ending at `now`.
///
/// Settings are resolved before `client` is touched, so a missing token never
/// reaches the network. Nothing is written unless every earlier stage succeeded.
///
/// # Errors
///
/// Returns the first error of any stage; none are retried.
pub fn run<C: HttpClient>(
    config: &Config,
    env: &impl EnvSource,
    overrides: &Overrides,
    client: C,
    now: DateTime<Utc>,
    options: RunOptions,
) -> Result<RunSummary> {
    let settings = resolve_settings(config, env, overrides)?;
    let window = DateWindow::year_ending(now);

    if options.verbose > 0 {
        eprintln!(
            "Fetching contributions for {} from {} to {}",
            settings.login,
            window.from_iso(),
            window.to_iso()
        );
    }

    let fetcher = CalendarFetcher::new(client, &settings);
    let spinner = FetchSpinner::new(fetcher.login(), options.quiet);
    let fetched = fetcher.fetch(&window);
    spinner.finish();
    let days = fetched?;

    if options.verbose > 0 {
        eprintln!("Received {} days", days.len());
    }

    let streak = compute_streak(&days);
    let svg = render_card(&streak, now.date_naive());
    write_card(&settings.output, &svg)?;

    Ok(RunSummary {
        login: settings.login,
        output: settings.output,
        days: days.len(),
        streak,
    })
}

/// Write the card, replacing any previous file.
fn write_card(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).map_err(|source| StreakCardError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
