//! The list of known player profiles.

use tracing::{debug, info, instrument, warn};

use crate::{Player, PlayerRecord};

/// Index of a profile in a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct PlayerId(usize);

impl PlayerId {
    /// Wraps a roster index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Roster index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Profile creation failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RosterError {
    /// Name was empty after trimming.
    #[display("Player name must not be empty")]
    EmptyName,

    /// No avatar chosen.
    #[display("Player avatar must not be empty")]
    EmptyAvatar,
}

/// Ordered player profiles, addressed by [`PlayerId`].
///
/// Profiles are only ever appended, so an id stays valid for the life of
/// the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds profiles from saved records, keeping their order.
    #[instrument(skip(records))]
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let players: Vec<_> = records.into_iter().map(Player::from_record).collect();
        debug!(count = players.len(), "Roster restored");
        Self { players }
    }

    /// Snapshots every profile for saving.
    pub fn to_records(&self) -> Vec<PlayerRecord> {
        self.players.iter().map(Player::to_record).collect()
    }

    /// Adds a profile after validating name and avatar.
    ///
    /// The name is trimmed; the avatar must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if either field is blank.
    #[instrument(skip(self))]
    pub fn create_player(&mut self, name: &str, avatar: &str) -> Result<PlayerId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected profile with empty name");
            return Err(RosterError::EmptyName);
        }
        if avatar.trim().is_empty() {
            warn!(name, "Rejected profile with empty avatar");
            return Err(RosterError::EmptyAvatar);
        }

        let id = self.push(Player::new(name, avatar));
        info!(%id, name, "Player created");
        Ok(id)
    }

    /// Appends an existing profile.
    pub fn push(&mut self, player: Player) -> PlayerId {
        self.players.push(player);
        PlayerId(self.players.len() - 1)
    }

    /// Profile for an id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    /// Mutable profile for an id.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0)
    }

    /// First profile with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .map(PlayerId)
    }

    /// Iterates profiles with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i), p))
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when there are no profiles.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Drops every session marker.
    pub(crate) fn clear_markers(&mut self) {
        self.players.iter_mut().for_each(Player::clear_marker);
    }

    /// Mutable access to two different profiles at once.
    pub(crate) fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut Player, &mut Player)> {
        if a == b || a.0 >= self.players.len() || b.0 >= self.players.len() {
            return None;
        }
        if a.0 < b.0 {
            let (left, right) = self.players.split_at_mut(b.0);
            Some((&mut left[a.0], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(a.0);
            Some((&mut right[0], &mut left[b.0]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_player_trims_name() {
        let mut roster = Roster::new();
        let id = roster.create_player("  Goku ", "goku.gif").expect("valid");
        assert_eq!(roster.get(id).map(|p| p.name().as_str()), Some("Goku"));
    }

    #[test]
    fn test_create_player_rejects_blank_fields() {
        let mut roster = Roster::new();
        assert_eq!(roster.create_player("   ", "a.gif"), Err(RosterError::EmptyName));
        assert_eq!(roster.create_player("Bo", ""), Err(RosterError::EmptyAvatar));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut roster = Roster::new();
        let a = roster.create_player("A", "a.gif").expect("valid");
        let b = roster.create_player("B", "b.gif").expect("valid");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(roster.find_by_name("B"), Some(b));
        assert_eq!(roster.find_by_name("C"), None);
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut roster = Roster::new();
        let a = roster.create_player("A", "a.gif").expect("valid");
        let b = roster.create_player("B", "b.gif").expect("valid");

        let (first, second) = roster.pair_mut(b, a).expect("distinct ids");
        assert_eq!(first.name(), "B");
        assert_eq!(second.name(), "A");

        assert!(roster.pair_mut(a, a).is_none());
        assert!(roster.pair_mut(a, PlayerId::new(7)).is_none());
    }

    #[test]
    fn test_records_round_trip() {
        let mut roster = Roster::new();
        let a = roster.create_player("A", "a.gif").expect("valid");
        roster.create_player("B", "b.gif").expect("valid");
        if let Some(player) = roster.get_mut(a) {
            player.record_win();
        }

        let restored = Roster::from_records(roster.to_records());
        assert_eq!(restored.to_records(), roster.to_records());
        assert_eq!(restored.len(), 2);
    }
}
