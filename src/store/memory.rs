//! In-process store.

use tracing::{debug, instrument};

use super::{PlayerStore, StoreError};
use crate::PlayerRecord;

/// Keeps records in memory. Useful for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<PlayerRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `records`.
    pub fn with_records(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }

    /// Records currently held.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }
}

impl PlayerStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        debug!(count = self.records.len(), "Loading records from memory");
        Ok(self.records.clone())
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    fn save(&mut self, records: &[PlayerRecord]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        debug!("Records saved to memory");
        Ok(())
    }
}
