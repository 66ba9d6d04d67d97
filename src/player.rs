//! Player profiles and their running statistics.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Marker;

/// Win/loss counters for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Stats {
    wins: u32,
    losses: u32,
    /// Consecutive wins, reset by any loss.
    streak: u32,
}

impl Stats {
    /// Stats restored from saved counters.
    pub fn new(wins: u32, losses: u32, streak: u32) -> Self {
        Self {
            wins,
            losses,
            streak,
        }
    }
}

/// Saved form of a player: identity plus stats.
///
/// Counters missing from older saves load as zero. The session marker is
/// never written.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayerRecord {
    name: String,
    avatar: String,
    #[serde(default)]
    wins: u32,
    #[serde(default)]
    losses: u32,
    #[serde(default)]
    streak: u32,
}

/// A player profile.
///
/// Stats change only through [`Player::record_win`] and
/// [`Player::record_loss`]. The marker is assigned per session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    name: String,
    /// Opaque avatar reference (path or URL).
    avatar: String,
    stats: Stats,
    marker: Option<Marker>,
}

impl Player {
    /// Creates a profile with zeroed stats and no marker.
    #[instrument(skip(name, avatar), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, avatar: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            avatar: avatar.as_ref().to_string(),
            stats: Stats::default(),
            marker: None,
        }
    }

    /// Restores a profile and its stats from a saved record.
    #[instrument(skip(record), fields(name = %record.name))]
    pub fn from_record(record: PlayerRecord) -> Self {
        Self {
            stats: Stats::new(record.wins, record.losses, record.streak),
            name: record.name,
            avatar: record.avatar,
            marker: None,
        }
    }

    /// Snapshot of identity and stats for persistence.
    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord::new(
            self.name.clone(),
            self.avatar.clone(),
            self.stats.wins,
            self.stats.losses,
            self.stats.streak,
        )
    }

    /// Counts a win and extends the streak.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_win(&mut self) {
        self.stats.wins = self.stats.wins.saturating_add(1);
        self.stats.streak = self.stats.streak.saturating_add(1);
        debug!(wins = self.stats.wins, streak = self.stats.streak, "Win recorded");
    }

    /// Counts a loss and breaks the streak.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_loss(&mut self) {
        self.stats.losses = self.stats.losses.saturating_add(1);
        self.stats.streak = 0;
        debug!(losses = self.stats.losses, "Loss recorded");
    }

    pub(crate) fn assign_marker(&mut self, marker: Marker) {
        self.marker = Some(marker);
    }

    pub(crate) fn clear_marker(&mut self) {
        self.marker = None;
    }
}
