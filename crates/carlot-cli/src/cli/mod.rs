//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "carlot",
    bin_name = "carlot",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validated vehicle records and the questions you can ask them",
    long_about = "Carlot loads car records from JSON files, rejects the ones that \
                  break its field rules, and answers sorting, filtering, grouping \
                  and statistics queries over the rest.",
    after_help = "EXAMPLES:\n\
        \x20 carlot                                  # run every query over the configured files\n\
        \x20 carlot validate data/AUDI.json data/BMW.json\n\
        \x20 carlot sort engine-power --desc\n\
        \x20 carlot stats price --output-format json\n\
        \x20 carlot completions bash > /usr/share/bash-completion/completions/carlot",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `demo` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the data files and run every query over them.
    #[command(
        about = "Run every query over the loaded cars (default)",
        after_help = "EXAMPLES:\n\
            \x20 carlot demo\n\
            \x20 carlot demo data/AUDI.json data/VOLVO.json"
    )]
    Demo(SourceArgs),

    /// Check records against the field rules without querying them.
    #[command(
        visible_alias = "check",
        about = "Validate records and report every broken field",
        after_help = "EXAMPLES:\n\
            \x20 carlot validate\n\
            \x20 carlot validate data/BMW.json --output-format json"
    )]
    Validate(SourceArgs),

    /// Sort the loaded cars by a numeric attribute.
    #[command(
        about = "Sort cars by components, engine power or wheel size",
        after_help = "EXAMPLES:\n\
            \x20 carlot sort components\n\
            \x20 carlot sort engine-power --desc\n\
            \x20 carlot sort \"wheel size\" data/VOLVO.json"
    )]
    Sort(SortArgs),

    /// Compute min, max and average of an attribute.
    #[command(
        visible_alias = "statistics",
        about = "Statistics for price, mileage or engine power",
        after_help = "EXAMPLES:\n\
            \x20 carlot stats mileage\n\
            \x20 carlot stats engine-power data/BMW.json"
    )]
    Stats(StatsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 carlot completions bash > ~/.local/share/bash-completion/completions/carlot\n\
            \x20 carlot completions zsh  > ~/.zfunc/_carlot\n\
            \x20 carlot completions fish > ~/.config/fish/completions/carlot.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Record files to load.  Empty means "use the configured data files".
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    #[arg(value_name = "FILES", help = "JSON record files (default: configured data files)")]
    pub files: Vec<String>,
}

// ── sort ──────────────────────────────────────────────────────────────────────

/// Arguments for `carlot sort`.
#[derive(Debug, Args)]
pub struct SortArgs {
    /// `components`, `engine power` or `wheel size`.  Dashes are accepted in
    /// place of spaces.
    #[arg(value_name = "ATTRIBUTE", help = "components | engine-power | wheel-size")]
    pub attribute: String,

    /// Largest first.
    #[arg(short = 'd', long = "desc", help = "Sort in descending order")]
    pub descending: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

// ── stats ─────────────────────────────────────────────────────────────────────

/// Arguments for `carlot stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(value_name = "ATTRIBUTE", help = "price | mileage | engine-power")]
    pub attribute: String,

    #[command(flatten)]
    pub sources: SourceArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `carlot completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Query attribute names are spelled with spaces in the core; accept the
/// dashed form too so they can be typed without quoting.
pub fn normalize_attribute(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', '_'], " ")
}

// ── tests ─────────────────────────────────────────────────────────────────────
