//! Data file discovery.
//!
//! Finds every `*.json` file under a directory so a whole data folder can be
//! loaded without listing files one by one.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use carlot_core::{application::ApplicationError, error::CarlotResult};

/// All `.json` files below `root`, sorted by path.
///
/// Unreadable entries below the root are skipped with a warning; an
/// unreadable root is an error.
#[instrument(skip_all, fields(root = %root.as_ref().display()))]
pub fn discover_json_files(root: impl AsRef<Path>) -> CarlotResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ApplicationError::SourceRead {
            source_id: root.display().to_string(),
            reason: "not a directory".into(),
        }
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let is_json = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(count = files.len(), "Data files discovered");
    Ok(files)
}
