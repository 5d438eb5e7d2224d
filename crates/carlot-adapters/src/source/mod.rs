//! Record source adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileSource;
pub use memory::MemorySource;

use carlot_core::{application::ApplicationError, domain::RawRecord, error::CarlotResult};

/// Parse JSON text that must hold a single object.
fn parse_record(source: &str, text: &str) -> CarlotResult<RawRecord> {
    serde_json::from_str::<RawRecord>(text).map_err(|e| {
        ApplicationError::SourceParse {
            source_id: source.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
