//! JSON file store.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::{PlayerStore, StoreError};
use crate::PlayerRecord;

/// Stores the record list as a JSON array in a single file.
///
/// A missing file reads as an empty list. Saving creates parent
/// directories and writes through a sibling temp file, then renames it
/// over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is read until [`PlayerStore::load`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlayerStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        if !self.path.exists() {
            debug!("No saved players yet");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::new(format!("Failed to read '{}': {}", self.path.display(), e))
        })?;
        let records: Vec<PlayerRecord> = serde_json::from_str(&content).map_err(|e| {
            StoreError::new(format!("Failed to parse '{}': {}", self.path.display(), e))
        })?;

        info!(count = records.len(), "Players loaded");
        Ok(records)
    }

    #[instrument(skip(self, records), fields(path = %self.path.display(), count = records.len()))]
    fn save(&mut self, records: &[PlayerRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        info!("Players saved");
        Ok(())
    }
}
