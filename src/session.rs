//! Game session: two players, one board, strict turn alternation.

use tracing::{debug, info, instrument, warn};

use crate::{Board, Marker, PlaceError, PlayerId, Position, Roster};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// A player completed a line.
    Win {
        /// The winning player.
        player: PlayerId,
        /// Their marker.
        marker: Marker,
    },
    /// Board filled without a line.
    Tie,
}

/// Lifecycle of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No players registered yet.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// The game ended; call [`GameSession::start`] for another.
    Finished(Finish),
}

/// Result of one [`GameSession::play_round`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The cell was taken. Nothing changed.
    Invalid {
        /// The occupied cell.
        position: Position,
    },
    /// The move completed a line.
    Win {
        /// The winner.
        player: PlayerId,
        /// The winning marker.
        marker: Marker,
    },
    /// The move filled the board without a line.
    Tie {
        /// Marker of the final move.
        marker: Marker,
    },
    /// The game continues.
    Next {
        /// Player now to move.
        player: PlayerId,
        /// Marker that was just placed.
        placed: Marker,
    },
}

impl RoundOutcome {
    /// Message for the player-facing status line.
    #[instrument(skip(roster))]
    pub fn message(&self, roster: &Roster) -> String {
        let name = |id: PlayerId| {
            roster
                .get(id)
                .map(|p| p.name().clone())
                .unwrap_or_else(|| id.to_string())
        };
        match *self {
            RoundOutcome::Invalid { .. } => "Cell already taken!".to_string(),
            RoundOutcome::Win { player, .. } => format!("{} wins!", name(player)),
            RoundOutcome::Tie { .. } => "It's a tie!".to_string(),
            RoundOutcome::Next { player, .. } => format!("{}'s Move", name(player)),
        }
    }

    /// Marker placed by this call, if any.
    pub fn marker(&self) -> Option<Marker> {
        match *self {
            RoundOutcome::Invalid { .. } => None,
            RoundOutcome::Win { marker, .. } | RoundOutcome::Tie { marker } => Some(marker),
            RoundOutcome::Next { placed, .. } => Some(placed),
        }
    }

    /// True for `Win` and `Tie`.
    pub fn is_final(&self) -> bool {
        matches!(self, RoundOutcome::Win { .. } | RoundOutcome::Tie { .. })
    }
}

/// Errors from starting or playing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Both seats were given the same player.
    #[display("Please select two different players.")]
    SamePlayer,

    /// The roster has fewer than two profiles.
    #[display("At least two players are required.")]
    NotEnoughPlayers,

    /// The id is not in the roster.
    #[display("Unknown player {_0}")]
    UnknownPlayer(#[error(not(source))] PlayerId),

    /// Moves are only accepted while a game is in progress.
    #[display("No game in progress")]
    NotInProgress,

    /// Cell index outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The player is in the roster but was not given a marker by
    /// [`GameSession::start`].
    #[display("Player {_0} holds no marker in this game")]
    Unseated(#[error(not(source))] PlayerId),
}

impl SessionError {
    /// True for setup problems the player can fix by choosing again.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            SessionError::SamePlayer | SessionError::NotEnoughPlayers | SessionError::UnknownPlayer(_)
        )
    }
}

/// Two players taking turns on one board.
///
/// Player stats live in the [`Roster`], which is passed to each call, so a
/// session holds only ids. Seat 0 plays `X` and moves first.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    seats: Option<[PlayerId; 2]>,
    active: usize,
    state: SessionState,
}

impl GameSession {
    /// Creates a session with no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats `first` as `X` and `second` as `O` and starts a fresh game.
    ///
    /// Can be called again at any point to begin a new game.
    ///
    /// # Errors
    ///
    /// Returns a setup [`SessionError`] if the players are the same, the
    /// roster has fewer than two profiles, or an id is unknown. Nothing is
    /// changed on error.
    #[instrument(skip(self, roster))]
    pub fn start(
        &mut self,
        roster: &mut Roster,
        first: PlayerId,
        second: PlayerId,
    ) -> Result<(), SessionError> {
        if roster.len() < 2 {
            warn!(profiles = roster.len(), "Not enough players to start");
            return Err(SessionError::NotEnoughPlayers);
        }
        if first == second {
            warn!("Same player selected twice");
            return Err(SessionError::SamePlayer);
        }
        for id in [first, second] {
            if roster.get(id).is_none() {
                warn!(%id, "Unknown player");
                return Err(SessionError::UnknownPlayer(id));
            }
        }

        roster.clear_markers();
        let (x, o) = roster
            .pair_mut(first, second)
            .ok_or(SessionError::UnknownPlayer(second))?;
        x.assign_marker(Marker::X);
        o.assign_marker(Marker::O);
        info!(x = %x.name(), o = %o.name(), "Session started");

        self.board.reset();
        self.seats = Some([first, second]);
        self.active = 0;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Plays the active player's marker at `index`.
    ///
    /// An occupied cell yields [`RoundOutcome::Invalid`] and leaves the
    /// session as it was. A win records the result on both players.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotInProgress`] outside a running game,
    /// [`SessionError::OutOfRange`] for an index outside 0-8, and
    /// [`SessionError::UnknownPlayer`] or [`SessionError::Unseated`] when
    /// `roster` is not the one the game was started with. The session is
    /// unchanged on error.
    #[instrument(skip(self, roster))]
    pub fn play_round(
        &mut self,
        roster: &mut Roster,
        index: usize,
    ) -> Result<RoundOutcome, SessionError> {
        let seats = match (self.state, self.seats) {
            (SessionState::InProgress, Some(seats)) => seats,
            _ => {
                warn!(state = ?self.state, "Move outside a running game");
                return Err(SessionError::NotInProgress);
            }
        };
        let marker = self.seated_marker(roster, seats)?;

        match self.board.place_mark(index, marker) {
            Ok(()) => {}
            Err(PlaceError::Occupied(position)) => {
                debug!(%position, "Cell taken, move rejected");
                return Ok(RoundOutcome::Invalid { position });
            }
            Err(PlaceError::OutOfRange(index)) => return Err(SessionError::OutOfRange(index)),
        }

        if let Some(winner) = self.board.check_winner() {
            let (winning, losing) = (seats[self.active], seats[1 - self.active]);
            let (w, l) = roster
                .pair_mut(winning, losing)
                .ok_or(SessionError::UnknownPlayer(winning))?;
            w.record_win();
            l.record_loss();
            info!(name = %w.name(), marker = %winner, "Game won");

            let finish = Finish::Win {
                player: winning,
                marker: winner,
            };
            self.state = SessionState::Finished(finish);
            return Ok(RoundOutcome::Win {
                player: winning,
                marker: winner,
            });
        }

        if self.board.is_tie() {
            info!("Game tied");
            self.state = SessionState::Finished(Finish::Tie);
            return Ok(RoundOutcome::Tie { marker });
        }

        self.active = 1 - self.active;
        let next = seats[self.active];
        debug!(%next, "Turn passed");
        Ok(RoundOutcome::Next {
            player: next,
            placed: marker,
        })
    }

    /// Marker held by the active player, after checking both seats
    /// against `roster`.
    fn seated_marker(&self, roster: &Roster, seats: [PlayerId; 2]) -> Result<Marker, SessionError> {
        for id in seats {
            if roster.get(id).is_none() {
                warn!(%id, "Seated player missing from roster");
                return Err(SessionError::UnknownPlayer(id));
            }
        }
        let active = seats[self.active];
        roster
            .get(active)
            .and_then(|p| *p.marker())
            .ok_or_else(|| {
                warn!(%active, "Seated player holds no marker");
                SessionError::Unseated(active)
            })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registered players, `X` first.
    pub fn players(&self) -> Option<[PlayerId; 2]> {
        self.seats
    }

    /// Player whose turn it is (or who made the final move).
    pub fn active_player(&self) -> Option<PlayerId> {
        self.seats.map(|seats| seats[self.active])
    }

    /// Marker of the active player. Seat 0 plays `X`.
    pub fn active_marker(&self) -> Option<Marker> {
        self.seats
            .map(|_| if self.active == 0 { Marker::X } else { Marker::O })
    }

    /// Marks placed in the current game.
    pub fn moves(&self) -> usize {
        self.board.marked_count()
    }
}
