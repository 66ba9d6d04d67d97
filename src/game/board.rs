//! The 3x3 board.

use super::rules;
use super::{Cell, Marker, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Errors from [`Board::place_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The cell already holds a marker.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),

    /// The index is outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),
}

/// Nine cells in row-major order.
///
/// A marked cell stays marked until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `marker` at `index` if that cell is empty.
    ///
    /// # Errors
    ///
    /// [`PlaceError::Occupied`] if the cell is taken and
    /// [`PlaceError::OutOfRange`] if `index` is not in 0-8. The board is
    /// left untouched in both cases.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, marker: Marker) -> Result<(), PlaceError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            PlaceError::OutOfRange(index)
        })?;

        let cell = &mut self.cells[position.index()];
        if *cell != Cell::Empty {
            debug!(%position, "Cell already occupied");
            return Err(PlaceError::Occupied(position));
        }

        *cell = Cell::Marked(marker);
        debug!(%position, %marker, "Mark placed");
        Ok(())
    }

    /// Marker on the first complete line, if any.
    pub fn check_winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// True when the board is full and nobody has won.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        debug!("Board reset");
    }

    /// Cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows like `X|2|O`, empty cells showing their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        assert_eq!(board.place_mark(4, Marker::X), Ok(()));
        assert_eq!(board.get(Position::Center), Cell::Marked(Marker::X));
        assert_eq!(board.marked_count(), 1);
    }

    #[test]
    fn test_occupied_cell_is_not_overwritten() {
        let mut board = Board::new();
        board.place_mark(0, Marker::X).expect("free cell");
        let before = board.clone();

        assert_eq!(
            board.place_mark(0, Marker::O),
            Err(PlaceError::Occupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_is_distinct_error() {
        let mut board = Board::new();
        assert_eq!(board.place_mark(9, Marker::X), Err(PlaceError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.place_mark(index, Marker::X).expect("free cell");
        }
        assert_eq!(board.check_winner(), Some(Marker::X));

        board.reset();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.check_winner(), None);
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_check_winner_is_idempotent() {
        let mut board = Board::new();
        for (index, marker) in [(0, Marker::O), (4, Marker::O), (8, Marker::O)] {
            board.place_mark(index, marker).expect("free cell");
        }
        assert_eq!(board.check_winner(), board.check_winner());
        assert_eq!(board.check_winner(), Some(Marker::O));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_mark(0, Marker::X).expect("free cell");
        board.place_mark(4, Marker::O).expect("free cell");
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
