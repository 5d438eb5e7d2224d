//! CLI errors: the core's errors plus the failures only the binary can hit,
//! each with suggestions and an exit code.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use carlot_core::error::CarlotError;

pub use carlot_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// At least one record was rejected or one source could not be read.
    #[error("{rejected} record(s) rejected, {failed} source(s) unreadable")]
    RecordsRejected { rejected: usize, failed: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `carlot-core` or an adapter.
    #[error(transparent)]
    Core(#[from] CarlotError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A result could not be rendered as JSON.
    #[error("Failed to encode output: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        CliError::Encode { source }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::RecordsRejected { .. } => vec![
                "Every broken field is listed above".into(),
                "Model names, components and tyre models must match the configured patterns"
                    .into(),
                "Override a pattern with CARLOT__PATTERNS__MODEL (or COMPONENTS, TYRE_MODEL)"
                    .into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use the CARLOT__SECTION__KEY form".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is still open (e.g. a closed pipe)".into(),
            ],

            Self::Encode { .. } => vec![
                "Retry with --output-format plain".into(),
                "This appears to be a bug in Carlot, please report it".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::RecordsRejected { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Encode { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Text for stderr: the message, the cause chain when `verbose`, then
    /// suggestions.  `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let alarm = Style::new().red().bold();
        let faint = Style::new().dimmed();

        let mut lines = vec![
            String::new(),
            format!("{} {}", paint("\u{2717} Error:", alarm), paint(&self.to_string(), alarm)),
        ];

        if verbose {
            let causes = std::iter::successors(self.source(), |&err| err.source());
            lines.extend(causes.map(|cause| {
                format!("  {} {}", paint("caused by:", faint), paint(&cause.to_string(), faint))
            }));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("Suggestions:", Style::new().yellow().bold()));
            lines.extend(suggestions.iter().map(|tip| format!("  - {tip}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Run again with -v for the cause chain.", faint));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn trace(&self) {
        let cause = self.source().map(ToString::to_string);
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), cause = cause.as_deref(), "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), cause = cause.as_deref(), "{self}");
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
