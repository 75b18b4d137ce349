//! Board tests - placement legality and row compaction through the facade

use brick_tetris::core::{Board, Piece};
use brick_tetris::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

fn filled_row(board: &mut Board, y: i8) {
    for x in 0..FIELD_WIDTH as i8 {
        board.set(x, y, 7);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), FIELD_WIDTH);
    assert_eq!(board.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i8 {
        for x in 0..FIELD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(0));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(FIELD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, FIELD_HEIGHT as i8), None);
    assert!(!board.is_valid(10, 0));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, 3));
    assert_eq!(board.get(5, 10), Some(3));
    assert!(board.is_occupied(5, 10));
    assert!(!board.set(10, 10, 3));
}

#[test]
fn test_every_kind_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert!(board.can_place(&piece), "{:?}", kind);
    }
}

#[test]
fn test_four_row_clear_compacts_field() {
    let mut board = Board::new();
    for y in 16..20 {
        filled_row(&mut board, y);
    }
    board.set(2, 15, 1);
    board.set(7, 0, 4);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.get(2, 19), Some(1));
    assert_eq!(board.get(7, 4), Some(4));
    assert!(board.matrix().row(0).iter().all(|&c| c == 0));
}

#[test]
fn test_full_field_clears_to_empty() {
    let mut board = Board::new();
    for y in 0..FIELD_HEIGHT as i8 {
        filled_row(&mut board, y);
    }
    assert_eq!(board.clear_full_rows().len(), FIELD_HEIGHT);
    assert!(board.matrix().is_empty());
}
