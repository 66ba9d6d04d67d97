//! Core domain types for the board: markers and cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the other marker.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a marker until the board is reset.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn test_marker_strings() {
        assert_eq!(Marker::X.to_string(), "X");
        assert_eq!(Marker::from_str("O").ok(), Some(Marker::O));
        assert!(Marker::from_str("Z").is_err());
    }

    #[test]
    fn test_cell_marker() {
        assert_eq!(Cell::Empty.marker(), None);
        assert_eq!(Cell::Marked(Marker::O).marker(), Some(Marker::O));
    }
}
