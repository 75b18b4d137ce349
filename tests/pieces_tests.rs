//! Piece catalog and rotation tests

use brick_tetris::core::{can_rotate, rotate, rotate_cw, template, Board, Piece, RotateOutcome};
use brick_tetris::types::PieceKind;

#[test]
fn test_catalog_order_and_spawn() {
    let expected_first_rows = [
        (PieceKind::I, [0, 0, 0, 0]),
        (PieceKind::O, [1, 1, 0, 0]),
        (PieceKind::T, [0, 1, 0, 0]),
        (PieceKind::J, [1, 0, 0, 0]),
        (PieceKind::L, [0, 0, 1, 0]),
        (PieceKind::S, [0, 1, 1, 0]),
        (PieceKind::Z, [1, 1, 0, 0]),
    ];
    for (kind, row) in expected_first_rows {
        assert_eq!(template(kind)[0], row, "{:?}", kind);
        let piece = Piece::new(kind);
        assert_eq!((piece.x, piece.y, piece.rotation), (3, 0, 0));
    }
}

#[test]
fn test_transform_is_transpose_then_reverse() {
    let shape = template(PieceKind::J);
    let turned = rotate_cw(&shape);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(turned[j][3 - i], shape[i][j]);
        }
    }
}

#[test]
fn test_rotation_against_wall_rolls_back() {
    let board = Board::new();
    // Vertical I hugging the right wall; turning back to horizontal would
    // stick out of the field.
    let mut piece = Piece::new(PieceKind::I);
    assert!(rotate(&board, &mut piece).is_success());
    while brick_tetris::core::movement::move_right(&board, &mut piece) {}
    let before = piece;

    let outcome = rotate(&board, &mut piece);
    assert!(!outcome.is_success());
    assert_eq!(piece, before);
    if can_rotate(&board, &before) {
        assert_eq!(outcome, RotateOutcome::BlockedAfterOffset);
    } else {
        assert_eq!(outcome, RotateOutcome::BlockedPrecheck);
    }
}

#[test]
fn test_rotation_never_overlaps_field() {
    let mut board = Board::new();
    for x in 0..10 {
        if x != 5 {
            board.set(x, 10, 1);
        }
    }
    for kind in PieceKind::ALL {
        for y in 0..16 {
            let mut piece = Piece::new(kind).at(3, y);
            if !board.can_place(&piece) {
                continue;
            }
            for _ in 0..4 {
                rotate(&board, &mut piece);
                assert!(board.can_place(&piece), "{:?} at y={}", kind, y);
            }
        }
    }
}
