//! Application layer for Carlot.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LoaderService, CarsService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! field rules itself. All record rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CarsService, LoadReport, LoaderService, RejectedRecord, SortAttribute, SourceFailure,
    Statistics, StatisticsAttribute, StatisticsReport, load_cars,
};

// Re-export port traits (for adapter implementation)
pub use ports::RecordSource;

pub use error::ApplicationError;
