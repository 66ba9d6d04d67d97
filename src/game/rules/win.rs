//! Win detection.

use super::super::{Board, Marker, Position};
use tracing::instrument;

/// The 8 winning lines, in the order they are scanned.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker that fills a winning line, if any.
///
/// Lines are checked in [`WINNING_LINES`] order and the first full line wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let marker = board.get(a).marker()?;
        (board.get(b).marker() == Some(marker) && board.get(c).marker() == Some(marker))
            .then_some(marker)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Marker)]) -> Board {
        let mut board = Board::new();
        for &(index, marker) in marks {
            board.place_mark(index, marker).expect("free cell");
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Marker::X), (1, Marker::X), (2, Marker::X)]);
        assert_eq!(check_winner(&board), Some(Marker::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, Marker::O), (4, Marker::O), (7, Marker::O)]);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Marker::O), (4, Marker::O), (6, Marker::O)]);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Marker::X), (1, Marker::O), (2, Marker::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_all_lines_detected() {
        for line in WINNING_LINES {
            let marks: Vec<_> = line.iter().map(|p| (p.index(), Marker::X)).collect();
            assert_eq!(check_winner(&board_with(&marks)), Some(Marker::X), "{line:?}");
        }
    }
}
