//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns the authoritative game state and all rules. It never
//! renders and never touches the filesystem: the front-end reads
//! [`GameInfo`] snapshots, and the high score goes through the
//! [`HighScoreStore`] trait.
//!
//! # Module Structure
//!
//! - [`matrix`]: owned rectangular grids (field, preview, render buffer)
//! - [`pieces`]: the seven 4x4 templates and clockwise template rotation
//! - [`rng`]: per-session LCG and uniform piece generator
//! - [`board`]: 10x20 field with placement checks and row compaction
//! - [`movement`]: translation, anchored rotation, hard drop
//! - [`scoring`]: line-clear points, level curve, drop speed
//! - [`snapshot`]: render-ready [`GameInfo`]
//! - [`highscore`]: persistence seam plus an in-memory store
//! - [`game_state`]: the [`GameSession`] state machine
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random (no bag) and spawn at (3, 0)
//! - Rotation is clockwise only; the piece is re-anchored to the top-left of
//!   its occupied cells, with an extra nudge for the I piece
//! - No wall kicks, no hold, no lock delay: a piece that cannot move down on
//!   a gravity step is fixed immediately
//! - 1/2/3/4 rows score 100/300/700/1500; a level every 600 points, up to 10
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use brick_tetris_core::{GameSession, MemoryHighScore};
//! use brick_tetris_types::{GameStage, UserAction};
//!
//! let mut game = GameSession::with_seed(12345, MemoryHighScore::new());
//! game.handle_input(UserAction::Start, false);
//! game.tick_at(Instant::now());
//! assert_eq!(game.stage(), GameStage::Moving);
//!
//! game.handle_input(UserAction::Left, false);
//! game.handle_input(UserAction::Action, false);
//! game.handle_input(UserAction::Down, true);
//!
//! let info = game.tick_at(Instant::now());
//! assert_eq!(info.pause_flag(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod highscore;
pub mod matrix;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use brick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameSession, SpawnMode};
pub use highscore::{HighScoreStore, MemoryHighScore};
pub use matrix::Matrix;
pub use movement::{can_rotate, hard_drop, rotate, RotateOutcome};
pub use pieces::{rotate_cw, template, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{level_for_score, line_clear_score, speed_for_level, Progress, ScoreResult};
pub use snapshot::GameInfo;
