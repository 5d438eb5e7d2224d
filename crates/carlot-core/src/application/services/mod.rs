//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load these files" or "group by tyre type".

pub mod cars_service;
pub mod loader_service;
pub mod query;

pub use cars_service::CarsService;
pub use loader_service::{LoadReport, LoaderService, RejectedRecord, SourceFailure, load_cars};
pub use query::{SortAttribute, Statistics, StatisticsAttribute, StatisticsReport};
