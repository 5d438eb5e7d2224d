//! Core domain layer for Carlot.
//!
//! This module contains pure business logic. All file and JSON-source
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + Eq + Hash
//! - **Rich domain model**: Predicates live on `Car`, not in services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Car, CarBody, Engine, Wheel};

pub use error::DomainError;

pub use validation::{CarValidator, RecordValidator, ValidationErrors, ValidationReport};

pub use value_objects::{CarBodyColor, CarBodyType, EngineType, TyreType};

/// A record as it arrives from a source: a parsed JSON object.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
