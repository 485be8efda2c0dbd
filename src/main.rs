use clap::Parser;

use streak_card::app::{self, RunOptions};
use streak_card::calendar::ReqwestClient;
use streak_card::cli::Cli;
use streak_card::config::{Config, ConfigLoader, FileConfigLoader, ProcessEnv};
use streak_card::output::ErrorOutput;
use streak_card::{EXIT_SUCCESS, exit_code_for};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> streak_card::Result<()> {
    let config = load_config(cli)?;
    let options = RunOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let summary = app::run(
        &config,
        &ProcessEnv,
        &cli.overrides(),
        ReqwestClient,
        chrono::Utc::now(),
        options,
    )?;

    if !cli.quiet {
        println!("{}", summary.summary_line());
    }
    Ok(())
}

fn load_config(cli: &Cli) -> streak_card::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
