//! Application layer errors.
//!
//! These errors represent failures in orchestration, not record rules.
//! Record rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The source could not be read at all.
    #[error("Cannot read source '{source_id}': {reason}")]
    SourceRead { source_id: String, reason: String },

    /// The source was read but is not a well-formed JSON object.
    #[error("Cannot parse source '{source_id}': {reason}")]
    SourceParse { source_id: String, reason: String },

    /// A sort or statistics attribute name that is not supported.
    #[error("Invalid attribute '{attribute}' (expected one of: {expected})")]
    InvalidQueryAttribute {
        attribute: String,
        expected: &'static str,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceRead { source_id, .. } => vec![
                format!("Failed to access: {}", source_id),
                "Check that the file exists and is readable".into(),
            ],
            Self::SourceParse { source_id, .. } => vec![
                format!("'{}' is not a JSON object", source_id),
                "Each data file must hold exactly one car record".into(),
            ],
            Self::InvalidQueryAttribute { expected, .. } => {
                vec![format!("Use one of: {}", expected)]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceRead { .. } => ErrorCategory::NotFound,
            Self::SourceParse { .. } => ErrorCategory::Validation,
            Self::InvalidQueryAttribute { .. } => ErrorCategory::Validation,
        }
    }
}
