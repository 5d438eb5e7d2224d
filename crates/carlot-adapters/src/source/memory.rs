//! In-memory record source for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use carlot_core::{
    application::{ApplicationError, ports::RecordSource},
    domain::RawRecord,
    error::CarlotResult,
};

use super::parse_record;

/// In-memory source: identifiers map to raw JSON text.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, source: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(source, json);
        self
    }

    /// Register JSON text under `source`, replacing any previous entry.
    pub fn insert(&self, source: impl Into<String>, json: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(source.into(), json.into());
        }
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for MemorySource {
    fn read(&self, source: &str) -> CarlotResult<RawRecord> {
        let inner = self.inner.read().map_err(|_| ApplicationError::SourceRead {
            source_id: source.to_string(),
            reason: "source lock poisoned".into(),
        })?;

        let text = inner.get(source).ok_or_else(|| ApplicationError::SourceRead {
            source_id: source.to_string(),
            reason: "not registered".into(),
        })?;

        parse_record(source, text)
    }
}
