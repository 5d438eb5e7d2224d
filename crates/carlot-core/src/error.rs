//! The one error type the core hands to callers.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Carlot Core operations.
#[derive(Debug, Error, Clone)]
pub enum CarlotError {
    /// Errors from the domain layer (rule or construction violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (sources, queries).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CarlotError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification the CLI turns into exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input: a rejected record, an unparsable source, an unknown attribute.
    Validation,
    NotFound,
    /// A field pattern that does not compile.
    Configuration,
}

/// Convenient result type alias.
pub type CarlotResult<T> = Result<T, CarlotError>;
