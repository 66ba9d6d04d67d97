//! Full-board and tie detection.

use super::super::{Board, Cell};
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Marker;
    use super::*;

    fn fill(board: &mut Board, pattern: &str) {
        for (index, ch) in pattern.chars().enumerate() {
            let marker = if ch == 'X' { Marker::X } else { Marker::O };
            board.place_mark(index, marker).expect("free cell");
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_mark(4, Marker::X).expect("free cell");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, "XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
