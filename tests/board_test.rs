//! Tests for the board and positions.

use tictactoe_duel::{Board, Cell, Marker, PlaceError, Position};

#[test]
fn test_position_index_round_trip() {
    assert_eq!(Position::TopLeft.index(), 0);
    assert_eq!(Position::Center.index(), 4);
    assert_eq!(Position::BottomRight.index(), 8);
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_empty_positions_on_empty_board() {
    let board = Board::new();
    assert_eq!(board.empty_positions().len(), 9);
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.place_mark(0, Marker::X).expect("free cell");
    board.place_mark(4, Marker::O).expect("free cell");

    let free = board.empty_positions();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Position::TopLeft));
    assert!(!free.contains(&Position::Center));
    assert!(free.contains(&Position::BottomRight));
}

#[test]
fn test_marked_cell_survives_until_reset() {
    let mut board = Board::new();
    board.place_mark(8, Marker::O).expect("free cell");
    for marker in [Marker::X, Marker::O] {
        assert_eq!(
            board.place_mark(8, marker),
            Err(PlaceError::Occupied(Position::BottomRight))
        );
    }
    assert_eq!(board.get(Position::BottomRight), Cell::Marked(Marker::O));

    board.reset();
    assert_eq!(board.cells(), &[Cell::Empty; 9]);
    assert_eq!(board.check_winner(), None);
    assert!(!board.is_tie());
}

#[test]
fn test_out_of_range_differs_from_occupied() {
    let mut board = Board::new();
    let err = board.place_mark(100, Marker::X).expect_err("out of range");
    assert_eq!(err, PlaceError::OutOfRange(100));
    assert_ne!(err, PlaceError::Occupied(Position::TopLeft));
}
