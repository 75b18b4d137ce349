//! Flat-file high-score store.
//!
//! The high score is a single decimal integer in a text file
//! (`highscore.txt` by default). Failures never reach the game: reads fall
//! back to 0 and writes are skipped, both logged at warn level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use brick_tetris_core::HighScoreStore;

pub use brick_tetris_core as core;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {path} does not hold a number: {content:?}")]
    Parse { path: PathBuf, content: String },
}

/// High score kept in a text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value; a missing file is `Ok(None)`
    pub fn load(&self) -> Result<Option<u32>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let trimmed = content.trim();
        trimmed
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StoreError::Parse {
                path: self.path.clone(),
                content: trimmed.to_string(),
            })
    }

    /// Overwrite the file with `score`
    pub fn save(&self, score: u32) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for FileHighScore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl HighScoreStore for FileHighScore {
    fn read_high_score(&self) -> u32 {
        match self.load() {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "could not read high score, using 0");
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u32) -> bool {
        if score <= self.read_high_score() {
            return false;
        }
        match self.save(score) {
            Ok(()) => {
                debug!(score, path = %self.path.display(), "high score written");
                true
            }
            Err(e) => {
                warn!(error = %e, "could not write high score");
                false
            }
        }
    }
}
