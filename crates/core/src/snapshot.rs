//! Snapshot module - render-ready view of a game
//!
//! [`GameInfo`] is what a front-end draws: the field with the falling piece
//! already overlaid, the next-piece preview and the numbers for the side
//! panel. It owns its grids, so writing a snapshot never touches the
//! authoritative field.

use crate::board::Board;
use crate::matrix::Matrix;
use crate::pieces::Piece;
use crate::scoring::Progress;
use crate::types::{GameStatus, BLOCK, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    /// Field plus the current piece, `FIELD_HEIGHT x FIELD_WIDTH`
    pub field: Matrix,
    /// Next piece preview, `BLOCK x BLOCK`, cell = type id + 1 or 0
    pub next: Matrix,
    pub score: u32,
    /// High score as loaded at session start (or restart)
    pub high_score: u32,
    pub level: u32,
    /// Drop interval in milliseconds
    pub speed: u32,
    pub status: GameStatus,
}

impl GameInfo {
    pub fn new() -> Self {
        let progress = Progress::new();
        Self {
            field: Matrix::new(FIELD_HEIGHT, FIELD_WIDTH),
            next: Matrix::new(BLOCK, BLOCK),
            score: progress.score(),
            high_score: 0,
            level: progress.level(),
            speed: progress.speed_ms(),
            status: GameStatus::Running,
        }
    }

    /// Numeric status flag: 0 running, 1 paused, 2 game over/terminated
    pub fn pause_flag(&self) -> u8 {
        self.status.as_u8()
    }

    /// Score beats the high score loaded at start
    pub fn is_new_high_score(&self) -> bool {
        self.score > self.high_score
    }

    /// Overwrite the field grid with `board` and overlay `piece`.
    ///
    /// Piece cells outside the field are dropped.
    pub fn compose_field(&mut self, board: &Board, piece: Option<&Piece>) {
        self.field.copy_from(board.matrix());
        if let Some(piece) = piece {
            let value = piece.cell_value();
            for (x, y) in piece.cells() {
                self.field.set(y as isize, x as isize, value);
            }
        }
    }

    pub fn set_progress(&mut self, progress: &Progress) {
        self.score = progress.score();
        self.level = progress.level();
        self.speed = progress.speed_ms();
    }
}

impl Default for GameInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `piece` into a `BLOCK x BLOCK` preview grid
pub fn write_preview(preview: &mut Matrix, piece: &Piece) {
    for (row, cells) in piece.colored_shape().iter().enumerate() {
        preview.row_mut(row).copy_from_slice(cells);
    }
}
