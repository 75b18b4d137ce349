//! Runtime configuration read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `BRICK_TETRIS_HIGHSCORE_PATH` | `highscore.txt` |
//! | `BRICK_TETRIS_TICK_MS` | `50` (minimum 1) |
//! | `BRICK_TETRIS_SEED` | clock-seeded |
//! | `BRICK_TETRIS_LOG_PATH` | logging off |
//! | `BRICK_TETRIS_LOG` | `info` |
//!
//! Missing or unparsable values fall back to the default.

use std::path::PathBuf;
use std::time::Duration;

use crate::store::DEFAULT_HIGHSCORE_FILE;
use crate::types::DEFAULT_TICK_MS;

pub const HIGHSCORE_PATH_VAR: &str = "BRICK_TETRIS_HIGHSCORE_PATH";
pub const TICK_MS_VAR: &str = "BRICK_TETRIS_TICK_MS";
pub const SEED_VAR: &str = "BRICK_TETRIS_SEED";
pub const LOG_PATH_VAR: &str = "BRICK_TETRIS_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "BRICK_TETRIS_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    pub tick_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let highscore_path = non_empty(HIGHSCORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_FILE));

        let tick_ms = non_empty(TICK_MS_VAR)
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .max(1);

        let seed = non_empty(SEED_VAR).and_then(|s| s.parse().ok());

        let log_path = non_empty(LOG_PATH_VAR).map(PathBuf::from);

        let log_filter =
            non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            highscore_path,
            tick_ms,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
        assert_eq!(cfg.tick_ms, 50);
        assert_eq!(cfg.tick_duration(), Duration::from_millis(50));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            (HIGHSCORE_PATH_VAR, "/tmp/best.txt"),
            (TICK_MS_VAR, "20"),
            (SEED_VAR, "42"),
            (LOG_PATH_VAR, "game.log"),
            (LOG_FILTER_VAR, "brick_tetris_core=debug"),
        ]);
        assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/best.txt"));
        assert_eq!(cfg.tick_ms, 20);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(cfg.log_filter, "brick_tetris_core=debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            (TICK_MS_VAR, "fast"),
            (SEED_VAR, "-3"),
            (LOG_PATH_VAR, "   "),
            (HIGHSCORE_PATH_VAR, ""),
        ]);
        assert_eq!(cfg.tick_ms, 50);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn tick_has_a_floor() {
        assert_eq!(config(&[(TICK_MS_VAR, "0")]).tick_ms, 1);
    }
}
