//! Infrastructure adapters for Carlot.
//!
//! This crate implements the ports defined in `carlot-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod discovery;
pub mod source;

// Re-export commonly used adapters
pub use discovery::discover_json_files;
pub use source::{JsonFileSource, MemorySource};
