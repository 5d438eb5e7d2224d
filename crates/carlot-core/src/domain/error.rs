// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports are copied into load summaries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    #[error("'{tag}' is not a known {kind}")]
    UnknownTag { kind: &'static str, tag: String },

    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Field '{field}' has an unexpected value: {reason}")]
    InvalidField { field: &'static str, reason: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTag { kind, tag } => vec![
                format!("'{}' is not a declared {}", tag, kind),
                "Tags are upper-case, e.g. DIESEL, WINTER, SEDAN, BLACK".into(),
            ],
            Self::MissingField { field } => vec![
                format!("Add the '{}' field to the record", field),
                "Run `carlot validate <FILE>` to see every failing field".into(),
            ],
            Self::InvalidPattern { pattern, .. } => vec![
                format!("Pattern '{}' does not compile", pattern),
                "Patterns use Rust regex syntax and always match the whole value".into(),
            ],
            _ => vec!["Run `carlot validate <FILE>` to see every failing field".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTag { .. } | Self::MissingField { .. } | Self::InvalidField { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidPattern { .. } => ErrorCategory::Configuration,
        }
    }
}
