//! Row types for the `players` table.

use derive_new::new;
use diesel::prelude::*;

use super::schema;
use crate::PlayerRecord;
use crate::store::StoreError;

/// A saved player row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schema::players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerRow {
    id: i32,
    name: String,
    avatar: String,
    wins: i32,
    losses: i32,
    streak: i32,
}

impl PlayerRow {
    /// Converts the row back into a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a counter is negative.
    pub fn into_record(self) -> Result<PlayerRecord, StoreError> {
        let counter = |value: i32, column: &str| {
            u32::try_from(value).map_err(|_| {
                StoreError::new(format!("Row {} has negative {}: {}", self.id, column, value))
            })
        };
        let wins = counter(self.wins, "wins")?;
        let losses = counter(self.losses, "losses")?;
        let streak = counter(self.streak, "streak")?;
        Ok(PlayerRecord::new(self.name, self.avatar, wins, losses, streak))
    }
}

/// Insertable player row.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::players)]
pub struct NewPlayerRow {
    name: String,
    avatar: String,
    wins: i32,
    losses: i32,
    streak: i32,
}

impl TryFrom<&PlayerRecord> for NewPlayerRow {
    type Error = StoreError;

    fn try_from(record: &PlayerRecord) -> Result<Self, Self::Error> {
        let counter = |value: u32| {
            i32::try_from(value)
                .map_err(|_| StoreError::new(format!("Counter {} too large for '{}'", value, record.name())))
        };
        Ok(Self::new(
            record.name().clone(),
            record.avatar().clone(),
            counter(*record.wins())?,
            counter(*record.losses())?,
            counter(*record.streak())?,
        ))
    }
}
