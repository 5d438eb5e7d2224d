//! # Carlot CLI
//!
//! Loads vehicle records, validates them, and answers queries over the
//! resulting collection.
//!
//! Arguments are parsed first, then logging is installed, then the layered
//! configuration is read and the command runs.  Any [`CliError`] ends up on
//! stderr with suggestions.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! |  0   | Success                                     |
//! |  1   | Internal / system error                     |
//! |  2   | User / input error, rejected records        |
//! |  3   | Resource not found                          |
//! |  4   | Configuration error (including bad patterns)|

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` take this path too, on stdout.
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }
    debug!(args = ?cli.global, "Arguments parsed");

    let Cli { global, command } = cli;
    let outcome = AppConfig::load(global.config.as_ref())
        .map(|config| config.with_overrides(&global))
        .map_err(CliError::from)
        .and_then(|config| {
            let output = OutputManager::new(&global, &config);
            run(command, config, output)
        });

    match outcome {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err, &global),
    }
}

/// Hand the command to its handler.  No subcommand means `demo`.
#[instrument(skip_all)]
fn run(command: Option<Commands>, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command.unwrap_or_else(|| Commands::Demo(Default::default())) {
        Commands::Demo(cmd) => commands::demo::execute(cmd, config, output),
        Commands::Validate(cmd) => commands::validate::execute(cmd, config, output),
        Commands::Sort(cmd) => commands::sort::execute(cmd, config, output),
        Commands::Stats(cmd) => commands::stats::execute(cmd, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

fn fail(err: &CliError, global: &GlobalArgs) -> ExitCode {
    err.trace();
    let color = !global.no_color && io::stderr().is_terminal();
    eprint!("{}", err.render(global.verbose > 0, color));
    ExitCode::from(err.exit_code())
}
