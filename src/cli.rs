use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Overrides;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "streak-card")]
#[command(author, version, about = "Render your GitHub contribution streak as an SVG card")]
#[command(long_about = "Fetches the last year of a user's GitHub contribution calendar, \
    computes the current and longest streak, and writes them to an SVG card.\n\n\
    The access token is read from GITHUB_TOKEN and the login from USERNAME.\n\n\
    Exit codes:\n  \
    0 - Card written\n  \
    1 - Request, response or write failure\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Print progress notes (login, date window, days received) to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// GitHub login (overrides USERNAME and the config file)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Where to write the SVG card [default: streak.svg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GraphQL endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Command-line values that take precedence over every other source.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            user: self.user.clone(),
            output: self.output.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
