//! Front-end state derived from the game: status line, player cards and
//! which cells accept clicks.
//!
//! Nothing here draws anything. A renderer reads a [`TableView`] after each
//! call and paints it however it likes.

use derive_getters::Getters;
use tracing::{debug, instrument};

use crate::{GameSession, Marker, Player, PlayerId, Roster, RoundOutcome, SessionError};

/// Which card is highlighted. X sits on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Player X.
    Left,
    /// Player O.
    Right,
}

impl From<Marker> for Side {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::X => Side::Left,
            Marker::O => Side::Right,
        }
    }
}

/// Name, avatar and stats shown beside the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerCard {
    name: String,
    avatar: String,
    wins: String,
    losses: String,
    streak: String,
}

impl From<&Player> for PlayerCard {
    fn from(player: &Player) -> Self {
        let stats = player.stats();
        Self {
            name: player.name().clone(),
            avatar: player.avatar().clone(),
            wins: format!("Wins: {}", stats.wins()),
            losses: format!("Losses: {}", stats.losses()),
            streak: format!("Streak: {}", stats.streak()),
        }
    }
}

/// Everything a renderer needs to paint the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TableView {
    message: String,
    cells: [Option<Marker>; 9],
    enabled: [bool; 9],
    active: Option<Side>,
    cards: Option<[PlayerCard; 2]>,
    #[getter(skip)]
    seats: Option<[PlayerId; 2]>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            message: "Press Start to begin".to_string(),
            cells: [None; 9],
            enabled: [false; 9],
            active: None,
            cards: None,
            seats: None,
        }
    }
}

impl TableView {
    /// A table waiting for Start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell at `index` accepts a move.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    /// Resets the table for a freshly started session.
    #[instrument(skip(self, session, roster))]
    pub fn on_start(&mut self, session: &GameSession, roster: &Roster) {
        let Some(seats) = session.players() else {
            debug!("Session has no players yet");
            return;
        };
        let (Some(x), Some(o)) = (roster.get(seats[0]), roster.get(seats[1])) else {
            debug!("Session players missing from roster");
            return;
        };

        self.cells = [None; 9];
        self.enabled = [true; 9];
        self.active = Some(Side::Left);
        self.message = format!("{} (X) starts the game!", x.name());
        self.cards = Some([PlayerCard::from(x), PlayerCard::from(o)]);
        self.seats = Some(seats);
    }

    /// Shows a rejected setup.
    #[instrument(skip(self))]
    pub fn on_setup_error(&mut self, error: &SessionError) {
        self.message = error.to_string();
    }

    /// Applies the outcome of a move at `index`.
    #[instrument(skip(self, roster))]
    pub fn on_outcome(&mut self, index: usize, outcome: &RoundOutcome, roster: &Roster) {
        self.message = outcome.message(roster);
        let Some(marker) = outcome.marker() else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(marker);
        }

        match *outcome {
            RoundOutcome::Win { .. } | RoundOutcome::Tie { .. } => {
                self.enabled = [false; 9];
                self.refresh_cards(roster);
            }
            RoundOutcome::Next { placed, .. } => {
                if let Some(enabled) = self.enabled.get_mut(index) {
                    *enabled = false;
                }
                self.active = Some(Side::from(placed.opponent()));
            }
            RoundOutcome::Invalid { .. } => {}
        }
    }

    fn refresh_cards(&mut self, roster: &Roster) {
        let (Some(cards), Some(seats)) = (self.cards.as_mut(), self.seats) else {
            return;
        };
        for (card, id) in cards.iter_mut().zip(seats) {
            if let Some(player) = roster.get(id) {
                *card = PlayerCard::from(player);
            }
        }
    }
}
