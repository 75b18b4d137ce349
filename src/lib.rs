//! Brick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks can use `brick_tetris::{core, ...}`.

pub mod config;

pub use brick_tetris_core as core;
pub use brick_tetris_input as input;
pub use brick_tetris_store as store;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;

pub use config::AppConfig;
