//! Tracing subscriber setup.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed.  Logs go to stderr so they never mix with results on
//! stdout.
//!
//! | Flags      | Level |
//! |------------|-------|
//! | (none)     | WARN  |
//! | `-v`       | INFO  |
//! | `-vv`      | DEBUG |
//! | `-vvv`     | TRACE |
//! | `--quiet`  | ERROR |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that get the flag-derived level.
const TARGETS: &[&str] = &["carlot", "carlot_core", "carlot_adapters"];

/// What the flags ask of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_terminal: bool) -> Self {
        let level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            (false, 2) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        Self {
            level,
            ansi: stderr_is_terminal && !args.no_color,
        }
    }

    fn filter(&self) -> EnvFilter {
        let directives: Vec<String> = TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect();
        EnvFilter::new(directives.join(","))
    }
}

/// Install the global subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| settings.filter());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color,
            config: None,
            data_dir: None,
            output_format: OutputFormat::Auto,
        }
    }

    fn level(verbose: u8, quiet: bool) -> LevelFilter {
        LogSettings::from_args(&args(verbose, quiet, false), false).level
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(level(0, false), LevelFilter::WARN);
        assert_eq!(level(1, false), LevelFilter::INFO);
        assert_eq!(level(2, false), LevelFilter::DEBUG);
        assert_eq!(level(3, false), LevelFilter::TRACE);
        assert_eq!(level(10, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level(0, true), LevelFilter::ERROR);
        assert_eq!(level(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn ansi_needs_a_terminal_and_no_opt_out() {
        assert!(LogSettings::from_args(&args(0, false, false), true).ansi);
        assert!(!LogSettings::from_args(&args(0, false, true), true).ansi);
        assert!(!LogSettings::from_args(&args(0, false, false), false).ansi);
    }

    #[test]
    fn filter_names_every_workspace_crate() {
        let filter = LogSettings::from_args(&args(2, false, false), false)
            .filter()
            .to_string();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
