//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the session and the board share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WINNING_LINES, check_winner};
