//! High-score persistence seam
//!
//! The session only talks to [`HighScoreStore`]; the file-backed store lives
//! in its own crate so the core never touches the filesystem.

/// Where the best score of all sessions is kept
pub trait HighScoreStore {
    /// Stored high score, 0 if none is stored or it cannot be read
    fn read_high_score(&self) -> u32;

    /// Store `score` if it beats the stored value.
    ///
    /// Returns true only if a new value was written.
    fn write_high_score(&mut self, score: u32) -> bool;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn read_high_score(&self) -> u32 {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, score: u32) -> bool {
        (**self).write_high_score(score)
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: u32,
    writes: u32,
}

impl MemoryHighScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self { value, writes: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of successful writes
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScore {
    fn read_high_score(&self) -> u32 {
        self.value
    }

    fn write_high_score(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        self.writes += 1;
        true
    }
}
