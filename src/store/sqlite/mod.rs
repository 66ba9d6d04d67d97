//! SQLite store built on diesel.

mod models;
mod schema;

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use super::{PlayerStore, StoreError};
use crate::PlayerRecord;
use models::{NewPlayerRow, PlayerRow};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Keeps player records in a SQLite database.
///
/// Each operation opens its own connection. A save replaces every row in
/// one transaction, so a failed save leaves the previous list intact.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StoreError> {
        info!(path = %db_path, "Opening SqliteStore");
        let store = Self { db_path };
        let mut conn = store.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migrations failed: {}", e)))?;
        Ok(store)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
        })
    }
}

impl PlayerStore for SqliteStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let mut conn = self.connection()?;

        let rows = schema::players::table
            .order(schema::players::id.asc())
            .select(PlayerRow::as_select())
            .load(&mut conn)?;

        let records = rows
            .into_iter()
            .map(PlayerRow::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = records.len(), "Players loaded");
        Ok(records)
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    fn save(&mut self, records: &[PlayerRecord]) -> Result<(), StoreError> {
        let rows = records
            .iter()
            .map(NewPlayerRow::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut conn = self.connection()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(schema::players::table).execute(conn)?;
            if !rows.is_empty() {
                diesel::insert_into(schema::players::table)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(())
        })?;

        info!("Players saved");
        Ok(())
    }
}
