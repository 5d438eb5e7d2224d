//! Result rendering on stdout.
//!
//! Commands never call `println!`; they go through [`OutputManager`], which
//! knows whether to color, whether `--quiet` is in force, and whether the
//! caller wants JSON instead of text.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use carlot_core::domain::Car;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Status marks prefixed to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

impl Tone {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Failure => "\u{2717}", // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Failure => Style::new().red(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }

    /// Failures stay visible under `--quiet`.
    const fn survives_quiet(self) -> bool {
        matches!(self, Self::Failure)
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line.
    pub fn print(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    /// `<symbol> <msg>`, colored by tone.
    pub fn mark(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet && !tone.survives_quiet() {
            return Ok(());
        }
        let line = if self.color {
            format!(
                "{} {}",
                tone.symbol().style(tone.style().bold()),
                msg.style(tone.style())
            )
        } else {
            format!("{} {msg}", tone.symbol())
        };
        self.term.write_line(&line)
    }

    pub fn header(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&title.cyan().bold().to_string())
        } else {
            self.term.write_line(title)
        }
    }

    /// A titled, indented list of cars; `(none)` for an empty list.
    pub fn cars(&self, title: &str, cars: &[Car]) -> io::Result<()> {
        self.header(title)?;
        if cars.is_empty() {
            return self.print("  (none)");
        }
        for car in cars {
            self.print(&format!("  {car}"))?;
        }
        Ok(())
    }

    /// Pretty-printed JSON.  Not silenced by `--quiet`: whoever asked for
    /// JSON is parsing stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        self.term.write_line(&serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
