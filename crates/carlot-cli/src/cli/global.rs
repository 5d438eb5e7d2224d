//! Flags accepted by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `carlot -v stats
//! price` and `carlot stats price -v` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` for the load summary, `-vv` for every loaded car,
    /// `-vvv` for everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress everything except errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>): any value but an empty
    /// one or a falsey word such as `0` or `false` turns color off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from this TOML file"
    )]
    pub config: Option<PathBuf>,

    /// Load every `*.json` below this directory.  Beats `data.dir` and
    /// `data.files` from the configuration; loses to explicit FILES.
    #[arg(
        long = "data-dir",
        global = true,
        value_name = "DIR",
        help = "Directory of JSON record files"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colored, for people.
    Human,
    /// Uncolored text.
    Plain,
    /// One JSON document per invocation.
    Json,
}
