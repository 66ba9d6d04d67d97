//! Lobby: the entry point a front end talks to.

use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

use crate::{
    ConfigError, GameConfig, GameSession, JsonFileStore, Player, PlayerId, PlayerStore, Roster,
    RosterError, RoundOutcome, SessionError, StoreError,
};

/// Any failure surfaced by the [`Lobby`].
#[derive(Debug, Clone, Display, Error, From)]
pub enum LobbyError {
    /// Session setup or move rejected.
    #[display("{_0}")]
    Session(SessionError),
    /// Profile rejected.
    #[display("{_0}")]
    Roster(RosterError),
    /// Loading or saving profiles failed.
    #[display("{_0}")]
    Store(StoreError),
    /// Configuration could not be loaded.
    #[display("{_0}")]
    Config(ConfigError),
}

/// Owns the profile store, the roster and the current game session.
///
/// The roster is written back to the store whenever a profile is created
/// and whenever a game is won.
#[derive(Debug)]
pub struct Lobby<S> {
    store: S,
    roster: Roster,
    session: GameSession,
}

impl Lobby<JsonFileStore> {
    /// Opens the JSON store named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::Store`] if saved players cannot be read.
    #[instrument(skip(config), fields(store_path = %config.store_path().display()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, LobbyError> {
        Self::open(JsonFileStore::new(config.store_path()), config)
    }
}

impl<S: PlayerStore> Lobby<S> {
    /// Loads saved profiles, seeding the configured defaults when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::Store`] if loading fails.
    #[instrument(skip(store, config))]
    pub fn open(store: S, config: &GameConfig) -> Result<Self, LobbyError> {
        let records = store.load()?;
        let roster = if records.is_empty() {
            info!(count = config.default_players().len(), "No saved players, using defaults");
            let mut roster = Roster::new();
            for profile in config.default_players() {
                roster.push(Player::new(profile.name(), profile.avatar()));
            }
            roster
        } else {
            Roster::from_records(records)
        };

        debug!(players = roster.len(), "Lobby opened");
        Ok(Self {
            store,
            roster,
            session: GameSession::new(),
        })
    }

    /// Known profiles.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a profile and saves the roster.
    ///
    /// # Errors
    ///
    /// [`LobbyError::Roster`] for a blank name or avatar, [`LobbyError::Store`]
    /// if saving fails.
    #[instrument(skip(self))]
    pub fn create_player(&mut self, name: &str, avatar: &str) -> Result<PlayerId, LobbyError> {
        let id = self.roster.create_player(name, avatar)?;
        self.save()?;
        Ok(id)
    }

    /// Starts a game with `first` as X and `second` as O.
    ///
    /// # Errors
    ///
    /// [`LobbyError::Session`] for an invalid pairing; nothing changes.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: PlayerId, second: PlayerId) -> Result<(), LobbyError> {
        self.session.start(&mut self.roster, first, second)?;
        Ok(())
    }

    /// Plays a move for whoever is to move and saves stats after a win.
    ///
    /// # Errors
    ///
    /// [`LobbyError::Session`] if no game is running or the index is out of
    /// range. [`LobbyError::Store`] if a win could not be saved; the game is
    /// still finished and its result is readable from [`Lobby::session`].
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, LobbyError> {
        let outcome = self.session.play_round(&mut self.roster, index)?;
        if let RoundOutcome::Win { player, .. } = outcome {
            debug!(%player, "Saving stats after win");
            self.save().inspect_err(|e| warn!(error = %e, "Failed to save stats"))?;
        }
        Ok(outcome)
    }

    /// Writes every profile to the store.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::Store`] if the store rejects the write.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), LobbyError> {
        self.store.save(&self.roster.to_records())?;
        Ok(())
    }

    /// Message for an outcome, using this lobby's player names.
    pub fn message(&self, outcome: &RoundOutcome) -> String {
        outcome.message(&self.roster)
    }

    /// Consumes the lobby, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
