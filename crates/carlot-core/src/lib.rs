//! Carlot Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Carlot, a tool
//! that validates vehicle records, loads them into an immutable collection
//! and answers analytical queries over it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           carlot-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (LoaderService, CarsService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: RecordSource)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    carlot-adapters (Infrastructure)     │
//! │     (JsonFileSource, MemorySource)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │    (Car, Engine, Wheel, CarValidator)   │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use carlot_core::{
//!     application::{ApplicationError, CarsService, LoaderService, SortAttribute},
//!     domain::{CarValidator, RawRecord},
//!     prelude::RecordSource,
//!     error::CarlotResult,
//! };
//!
//! // Adapters (see `carlot-adapters`) implement the source port.
//! struct FileSource;
//!
//! impl RecordSource for FileSource {
//!     fn read(&self, source: &str) -> CarlotResult<RawRecord> {
//!         let text = std::fs::read_to_string(source).map_err(|e| ApplicationError::SourceRead {
//!             source_id: source.to_string(),
//!             reason: e.to_string(),
//!         })?;
//!         serde_json::from_str(&text).map_err(|e| {
//!             ApplicationError::SourceParse {
//!                 source_id: source.to_string(),
//!                 reason: e.to_string(),
//!             }
//!             .into()
//!         })
//!     }
//! }
//!
//! // 1. Compile the field rules
//! let validator = CarValidator::new(r"[A-Z\s]+", r"[A-Z\s]+", r"[A-Z\s]+").unwrap();
//!
//! // 2. Load through the injected source adapter
//! let loader = LoaderService::new(Box::new(FileSource), Box::new(validator));
//! let report = loader.load(&["data/AUDI.json", "data/BMW.json"]);
//!
//! // 3. Query
//! let service = CarsService::from(report);
//! let fastest_first = service.sort_cars(SortAttribute::EnginePower, true);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CarsService, LoadReport, LoaderService, SortAttribute, Statistics, StatisticsAttribute,
        StatisticsReport,
        ports::RecordSource,
    };
    pub use crate::domain::{
        Car, CarBody, CarBodyColor, CarBodyType, CarValidator, Engine, EngineType, RawRecord,
        RecordValidator, TyreType, ValidationErrors, ValidationReport, Wheel,
    };
    pub use crate::error::{CarlotError, CarlotResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
