//! Zipstamp CLI - Timestamped zip backups of a folder with retention.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            formatter.format_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli, formatter: &dyn output::OutputFormatter) -> Result<()> {
    match &cli.command {
        cli::Commands::Create(args) => {
            commands::create::execute(args, formatter, cli.quiet, cli.json)
        }
        cli::Commands::Prune(args) => commands::prune::execute(args, formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
