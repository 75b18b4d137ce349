//! Scoring module - line-clear points, level curve and drop speed
//!
//! Rules:
//! - Clearing 1/2/3/4 rows at once awards 100/300/700/1500 points.
//! - A level is gained every 600 points, capped at level 10.
//! - The drop interval only changes when the level does:
//!   `max(100, 1000 - (level - 1) * 100)` milliseconds.

use crate::types::{
    BASE_SPEED_MS, LINE_SCORES, MAX_LEVEL, MIN_SPEED_MS, SCORE_PER_LEVEL, SPEED_STEP_MS,
    START_LEVEL,
};

/// Points for clearing `lines` rows with one piece
pub fn line_clear_score(lines: usize) -> u32 {
    match lines {
        0 => 0,
        n if n < LINE_SCORES.len() => LINE_SCORES[n],
        _ => LINE_SCORES[LINE_SCORES.len() - 1],
    }
}

/// Level reached with `score` points
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Drop interval in milliseconds at `level`
pub fn speed_for_level(level: u32) -> u32 {
    let steps = level.saturating_sub(START_LEVEL);
    BASE_SPEED_MS
        .saturating_sub(steps.saturating_mul(SPEED_STEP_MS))
        .max(MIN_SPEED_MS)
}

/// Result of applying one line clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines: usize,
    pub points: u32,
    pub level_changed: bool,
}

/// Score, level and drop speed of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
    speed_ms: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: START_LEVEL,
            speed_ms: BASE_SPEED_MS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current drop interval in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Credit a line clear. The speed is recomputed only if the level moved
    pub fn apply_lines(&mut self, lines: usize) -> ScoreResult {
        let points = line_clear_score(lines);
        self.score = self.score.saturating_add(points);

        let level = level_for_score(self.score);
        let level_changed = level != self.level;
        if level_changed {
            self.level = level;
            self.speed_ms = speed_for_level(level);
        }

        ScoreResult {
            lines,
            points,
            level_changed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 700);
        assert_eq!(line_clear_score(4), 1500);
        assert_eq!(line_clear_score(6), 1500);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(599), 1);
        assert_eq!(level_for_score(600), 2);
        assert_eq!(level_for_score(1199), 2);
        assert_eq!(level_for_score(5400), 10);
        assert_eq!(level_for_score(1_000_000), 10);
    }

    #[test]
    fn test_speed_curve() {
        assert_eq!(speed_for_level(1), 1000);
        assert_eq!(speed_for_level(2), 900);
        assert_eq!(speed_for_level(10), 100);
        assert_eq!(speed_for_level(50), 100);
    }

    #[test]
    fn test_progress_starts_at_level_one() {
        let p = Progress::new();
        assert_eq!((p.score(), p.level(), p.speed_ms()), (0, 1, 1000));
    }

    #[test]
    fn test_no_lines_changes_nothing() {
        let mut p = Progress::new();
        let result = p.apply_lines(0);
        assert_eq!(result.points, 0);
        assert!(!result.level_changed);
        assert_eq!(p, Progress::new());
    }

    #[test]
    fn test_level_up_recomputes_speed() {
        let mut p = Progress::new();
        p.apply_lines(3);
        assert_eq!((p.score(), p.level(), p.speed_ms()), (700, 2, 900));

        // 700 + 300 = 1000: still level 2, speed untouched
        let result = p.apply_lines(2);
        assert!(!result.level_changed);
        assert_eq!((p.score(), p.level(), p.speed_ms()), (1000, 2, 900));

        let result = p.apply_lines(4);
        assert!(result.level_changed);
        assert_eq!((p.score(), p.level(), p.speed_ms()), (2500, 5, 600));
    }

    #[test]
    fn test_level_caps_at_ten() {
        let mut p = Progress::new();
        for _ in 0..10 {
            p.apply_lines(4);
        }
        assert_eq!(p.score(), 15000);
        assert_eq!(p.level(), 10);
        assert_eq!(p.speed_ms(), 100);
    }

    #[test]
    fn test_reset() {
        let mut p = Progress::new();
        p.apply_lines(4);
        p.reset();
        assert_eq!(p, Progress::new());
    }
}
