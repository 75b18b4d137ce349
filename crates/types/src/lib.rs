//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the game core, the terminal front-end and the high-score store alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Piece frame**: every piece lives in a 4x4 template
//! - **Spawn position**: (3, 0), i.e. `FIELD_WIDTH / 2 - BLOCK / 2`
//!
//! # Speed Curve
//!
//! | Level | Drop interval |
//! |-------|---------------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | ... | -100ms per level |
//! | 10 | 100ms (floor) |
//!
//! A level is gained every 600 points, capped at level 10.
//!
//! # Examples
//!
//! ```
//! use brick_tetris_types::{GameStatus, PieceKind, UserAction, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::T.cell_value(), 3);
//!
//! assert_ne!(UserAction::Pause, UserAction::Start);
//! assert_eq!(GameStatus::Terminated.as_u8(), 2);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Side of the square template every piece is stored in
pub const BLOCK: usize = 4;

/// Drop interval at level 1 (1000ms = 1 second per row)
pub const BASE_SPEED_MS: u32 = 1000;

/// Drop interval decrease per level gained
pub const SPEED_STEP_MS: u32 = 100;

/// Fastest possible drop interval
pub const MIN_SPEED_MS: u32 = 100;

/// Level of a freshly started game
pub const START_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Points needed per level
pub const SCORE_PER_LEVEL: u32 = 600;

/// Default external tick cadence of the terminal game loop
pub const DEFAULT_TICK_MS: u32 = 50;

/// Points for clearing N rows at once, indexed by row count.
///
/// Clearing more than four rows at once cannot happen with a 4-cell-tall
/// piece; such counts score like a four-row clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// A field cell: 0 is empty, 1..=7 is the occupying piece's type id + 1
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY_CELL: Cell = 0;

/// The seven tetromino piece kinds, in catalog order.
///
/// The discriminant is the piece's type id (0-6); field cells store
/// `type id + 1`, which also selects the piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Look up a kind by its type id
    ///
    /// ```
    /// use brick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(1), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Type id (0-6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Value written into field cells occupied by this kind
    pub fn cell_value(self) -> Cell {
        self as Cell + 1
    }

    /// Inverse of [`PieceKind::cell_value`]; empty or unknown cells yield `None`
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }
}

/// Abstract user actions accepted by the game session.
///
/// The terminal front-end maps raw key codes onto these; anything it does not
/// recognize never reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// Start a game (or restart after game over)
    Start,
    /// Toggle pause
    Pause,
    /// End the session
    Terminate,
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Reserved, no effect
    Up,
    /// With `hold = true`: drop the piece to its resting position
    Down,
    /// Rotate piece 90° clockwise
    Action,
}

/// Externally visible run status (the snapshot's pause flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    /// Game over or terminated; the front-end stops on this
    Terminated,
}

impl GameStatus {
    /// Numeric flag: 0 = running, 1 = paused, 2 = game over/terminated
    pub fn as_u8(self) -> u8 {
        match self {
            GameStatus::Running => 0,
            GameStatus::Paused => 1,
            GameStatus::Terminated => 2,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == GameStatus::Terminated
    }
}

/// Internal stage of the game state machine.
///
/// ```text
/// StartWait -> Spawn -> Moving <-> Shifting -> Attaching -> Spawn ...
///                         |
///                       Paused
/// Spawn (no room) -> GameOver
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStage {
    #[default]
    StartWait,
    Spawn,
    Moving,
    Shifting,
    Paused,
    Attaching,
    Terminated,
    GameOver,
}

impl GameStage {
    /// Terminal stages never transition again on their own
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStage::Terminated | GameStage::GameOver)
    }
}
