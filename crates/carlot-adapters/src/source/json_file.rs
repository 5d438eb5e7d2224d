//! JSON file source using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use carlot_core::{
    application::{ApplicationError, ports::RecordSource},
    domain::RawRecord,
    error::{CarlotError, CarlotResult},
};

use super::parse_record;

/// Production source: each identifier is a path to a JSON file.
///
/// Relative paths are resolved against the optional base directory.
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    base_dir: Option<PathBuf>,
}

impl JsonFileSource {
    /// Create a source that resolves paths against the working directory.
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Create a source that resolves relative paths against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn read(&self, source: &str) -> CarlotResult<RawRecord> {
        let path = self.resolve(source);
        debug!(path = %path.display(), "Reading record");

        let text = std::fs::read_to_string(&path).map_err(|e| map_io_error(source, &path, e))?;
        parse_record(source, &text)
    }
}

fn map_io_error(source: &str, path: &Path, e: io::Error) -> CarlotError {
    ApplicationError::SourceRead {
        source_id: source.to_string(),
        reason: format!("Failed to read {}: {}", path.display(), e),
    }
    .into()
}
