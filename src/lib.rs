//! Tictactoe Duel - two-player tic-tac-toe with persistent player profiles.
//!
//! # Architecture
//!
//! - **Game**: board, markers and the win/tie rules
//! - **Players**: profiles with wins, losses and streak, kept in a [`Roster`]
//! - **Session**: two players alternating on one board, producing [`RoundOutcome`]s
//! - **Store**: load/save gateway for [`PlayerRecord`]s (memory, JSON file, SQLite)
//! - **Lobby**: ties roster, session and store together for a front end
//! - **View**: status line, player cards and cell locks for a renderer
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameConfig, Lobby, MemoryStore, PlayerId, RoundOutcome};
//!
//! # fn example() -> Result<(), tictactoe_duel::LobbyError> {
//! let mut lobby = Lobby::open(MemoryStore::new(), &GameConfig::default())?;
//! lobby.start(PlayerId::new(0), PlayerId::new(1))?;
//!
//! let mut outcome = None;
//! for index in [0, 3, 1, 4, 2] {
//!     outcome = Some(lobby.play_round(index)?);
//! }
//! assert!(matches!(outcome, Some(RoundOutcome::Win { .. })));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod lobby;
mod logging;
mod player;
mod roster;
mod session;
mod store;
mod view;

// Crate-level exports - Game types
pub use game::{Board, Cell, Marker, PlaceError, Position, rules};

// Crate-level exports - Players
pub use player::{Player, PlayerRecord, Stats};
pub use roster::{PlayerId, Roster, RosterError};

// Crate-level exports - Session
pub use session::{Finish, GameSession, RoundOutcome, SessionError, SessionState};

// Crate-level exports - Persistence
pub use store::{JsonFileStore, MemoryStore, PlayerStore, StoreError};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;

// Crate-level exports - Front end
pub use lobby::{Lobby, LobbyError};
pub use view::{PlayerCard, Side, TableView};

// Crate-level exports - Ambient
pub use config::{ConfigError, DefaultProfile, GameConfig};
pub use logging::init_tracing;
