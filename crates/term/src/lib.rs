//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`core::GameInfo`] snapshot into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes that buffer to the terminal, writing only the
//! cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, FieldFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
