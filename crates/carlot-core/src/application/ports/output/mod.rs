//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `carlot-adapters` crate provides implementations.

use crate::domain::RawRecord;
use crate::error::CarlotResult;

/// Port for obtaining raw records.
///
/// Implemented by:
/// - `carlot_adapters::source::JsonFileSource` (production)
/// - `carlot_adapters::source::MemorySource` (testing)
///
/// ## Design Notes
///
/// - A source identifier is opaque to the core (a path, a key, ...)
/// - Unreadable sources fail with `ApplicationError::SourceRead`
/// - Sources that are not a JSON object fail with `ApplicationError::SourceParse`
#[cfg_attr(test, mockall::automock)]
pub trait RecordSource: Send + Sync {
    /// Read and parse one record.
    fn read(&self, source: &str) -> CarlotResult<RawRecord>;
}
