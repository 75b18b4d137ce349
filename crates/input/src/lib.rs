//! Terminal input module.
//!
//! Maps `crossterm` key events onto the session's abstract
//! [`crate::types::UserAction`] plus the hold flag. Unbound keys map to
//! nothing and never reach the session.

pub mod map;

pub use brick_tetris_types as types;

pub use map::{map_key_event, InputEvent};
