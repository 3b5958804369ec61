//! Scoring module - classic line-clear points and level progression
//!
//! Points are `(level + 1) * LINE_SCORES[rows]`, with no drop bonus. The
//! first level-up needs `10 * start_level + 10` lines; every later one needs
//! `LINES_PER_LEVEL` more, counted from zero again after each level-up.

use serde::Serialize;

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Calculate line clear score
/// lines: number of rows cleared by one deposit (0-4)
/// level: level in force when the rows cleared
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Lines needed for the first level-up from `start_level`
pub fn first_level_threshold(start_level: u32) -> u32 {
    start_level
        .saturating_mul(LINES_PER_LEVEL)
        .saturating_add(LINES_PER_LEVEL)
}

/// Score, line and level bookkeeping for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Progress {
    pub level: u32,
    pub score: u32,
    /// Lines cleared since the last level-up (or game start)
    pub lines_at_level: u32,
    pub total_lines: u32,
    /// Lines needed at this level before the next level-up
    pub threshold: u32,
}

impl Progress {
    pub fn new(start_level: u32) -> Self {
        Self {
            level: start_level,
            score: 0,
            lines_at_level: 0,
            total_lines: 0,
            threshold: first_level_threshold(start_level),
        }
    }

    /// Credit a line clear; returns the points awarded
    pub fn record_clear(&mut self, lines: usize) -> u32 {
        let points = line_clear_score(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines_at_level = self.lines_at_level.saturating_add(lines as u32);
        self.total_lines = self.total_lines.saturating_add(lines as u32);
        points
    }

    /// Advance one level if the threshold is reached; returns whether it did
    pub fn check_level_up(&mut self) -> bool {
        if self.lines_at_level < self.threshold {
            return false;
        }
        self.level = self.level.saturating_add(1);
        self.lines_at_level = 0;
        self.threshold = LINES_PER_LEVEL;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        // Level 0
        assert_eq!(line_clear_score(0, 0), 0);
        assert_eq!(line_clear_score(1, 0), 40);
        assert_eq!(line_clear_score(2, 0), 100);
        assert_eq!(line_clear_score(3, 0), 300);
        assert_eq!(line_clear_score(4, 0), 1200);

        // Level 4
        assert_eq!(line_clear_score(1, 4), 200);
        assert_eq!(line_clear_score(2, 4), 500);
        assert_eq!(line_clear_score(3, 4), 1500);
        assert_eq!(line_clear_score(4, 4), 6000);
    }

    #[test]
    fn test_out_of_table_clear_scores_nothing() {
        assert_eq!(line_clear_score(5, 0), 0);
    }

    #[test]
    fn test_first_threshold_depends_on_start_level() {
        assert_eq!(first_level_threshold(0), 10);
        assert_eq!(first_level_threshold(5), 60);
        assert_eq!(first_level_threshold(10), 110);
    }

    #[test]
    fn test_level_progression_from_zero() {
        let mut progress = Progress::new(0);
        for _ in 0..9 {
            progress.record_clear(1);
            assert!(!progress.check_level_up());
        }
        progress.record_clear(1);
        assert!(progress.check_level_up());
        assert_eq!(progress.level, 1);
        assert_eq!(progress.lines_at_level, 0);
        assert_eq!(progress.total_lines, 10);

        // Every later level needs exactly ten more.
        progress.record_clear(4);
        progress.record_clear(4);
        assert!(!progress.check_level_up());
        progress.record_clear(2);
        assert!(progress.check_level_up());
        assert_eq!(progress.level, 2);
        assert_eq!(progress.total_lines, 20);
    }

    #[test]
    fn test_level_up_resets_counter_without_carry() {
        let mut progress = Progress::new(0);
        progress.record_clear(4);
        progress.record_clear(4);
        progress.record_clear(3);
        assert!(progress.check_level_up());
        assert_eq!(progress.lines_at_level, 0);
        assert_eq!(progress.total_lines, 11);
    }

    #[test]
    fn test_score_uses_level_before_level_up() {
        let mut progress = Progress::new(0);
        progress.lines_at_level = 9;
        let points = progress.record_clear(1);
        assert_eq!(points, 40);
        assert!(progress.check_level_up());
        assert_eq!(progress.score, 40);
    }
}
