mod board;
mod position;
pub mod rules;
mod types;

pub use board::{Board, PlaceError};
pub use position::Position;
pub use types::{Cell, Marker};
