//! Board module - the authoritative playing field
//!
//! The field is a 10x20 grid of cells where 0 is empty and 1..=7 is the type
//! id + 1 of the piece that was fixed there.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Only two operations mutate the field: fixing a piece ([`Board::lock_piece`])
//! and compacting full rows ([`Board::clear_full_rows`]).

use arrayvec::ArrayVec;

use crate::matrix::Matrix;
use crate::pieces::Piece;
use crate::types::{Cell, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH};

/// Row indices cleared by one compaction pass, in scan order
pub type ClearedRows = ArrayVec<usize, FIELD_HEIGHT>;

/// The game field - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Matrix,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: Matrix::new(FIELD_HEIGHT, FIELD_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.cells.get(y as isize, x as isize)
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        self.cells.set(y as isize, x as isize, cell)
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY_CELL)
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    /// Placement legality: every occupied cell of the piece is in bounds and empty
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| self.is_valid(x, y))
    }

    /// Fix a piece into the field.
    ///
    /// Cells outside the field are skipped. Returns the number of cells written.
    pub fn lock_piece(&mut self, piece: &Piece) -> usize {
        let value = piece.cell_value();
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, value) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT {
            return false;
        }
        self.cells.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Empty row `y` and shift every row above it down by one
    pub fn clear_row(&mut self, y: usize) {
        if y >= FIELD_HEIGHT {
            return;
        }
        self.cells.row_mut(y).fill(EMPTY_CELL);
        self.cells.shift_down_into(y);
    }

    /// Clear all full rows, scanning bottom to top.
    ///
    /// After a clear the same row index is examined again, since the row above
    /// has just moved into it. Returns the indices at which full rows were found.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = FIELD_HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                // At most FIELD_HEIGHT rows can ever be cleared in one pass.
                let _ = cleared.try_push(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Underlying grid
    pub fn matrix(&self) -> &Matrix {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Create from nested rows (tests and tooling)
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        assert_eq!(rows.len(), FIELD_HEIGHT);
        let cells = Matrix::from_rows(rows);
        assert_eq!(cells.cols(), FIELD_WIDTH);
        Self { cells }
    }

    /// Convert to nested rows (tests and tooling)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.to_rows()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
