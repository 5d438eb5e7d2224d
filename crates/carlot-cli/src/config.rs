//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the values drawn
//! from it (pattern strings, file names).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI arguments: FILES at the call-site, `--data-dir` and `--no-color`
//!    through [`AppConfig::with_overrides`]
//! 2. Environment variables prefixed `CARLOT__`, e.g.
//!    `CARLOT__PATTERNS__MODEL` or `CARLOT__DATA__FILES=a.json,b.json`
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::GlobalArgs;

/// Field rule applied to model names, components and tyre models when
/// nothing else is configured.
pub const DEFAULT_PATTERN: &str = r"^[A-Z\s]+$";

const ENV_PREFIX: &str = "CARLOT";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where records are read from.
    pub data: DataConfig,
    /// Validation patterns.
    pub patterns: PatternConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub files: Vec<String>,
    /// When set, every `*.json` file below this directory is loaded instead
    /// of `files`.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub model: String,
    pub components: String,
    pub tyre_model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            files: ["AUDI", "BMW", "VOLVO", "VOLVO2"]
                .iter()
                .map(|name| format!("data/{name}.json"))
                .collect(),
            dir: None,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_PATTERN.into(),
            components: DEFAULT_PATTERN.into(),
            tyre_model: DEFAULT_PATTERN.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file and the process environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is consulted and silently
    /// skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file.map(PathBuf::as_path), Self::environment())
    }

    /// Same as [`Self::load`] with an explicit environment source.
    pub fn load_with(config_file: Option<&Path>, environment: Environment) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(
            files = config.data.files.len(),
            dir = ?config.data.dir,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Fold the flags that shadow configuration keys into `self`.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data.dir = Some(dir.clone());
        }
        self.output.no_color |= args.no_color;
        self
    }

    /// The `CARLOT__SECTION__KEY` environment source.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("data.files")
            .try_parsing(true)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.carlot.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "carlot", "carlot")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".carlot.toml"))
    }
}
