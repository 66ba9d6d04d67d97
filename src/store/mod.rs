//! Persistence of player profiles.
//!
//! The game only sees a list of [`PlayerRecord`]s going in and out of a
//! [`PlayerStore`]; the medium is up to the implementation.

mod error;
mod json;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::PlayerRecord;

/// Load/save gateway for the full list of player records.
pub trait PlayerStore {
    /// Returns every saved record in saved order. An empty store yields an
    /// empty list.
    fn load(&self) -> Result<Vec<PlayerRecord>, StoreError>;

    /// Replaces the saved list with `records`.
    fn save(&mut self, records: &[PlayerRecord]) -> Result<(), StoreError>;
}
