//! Score and level tracking
//!
//! Compatibility note:
//! The multi-line clear table (1 -> 100, 2 -> 300, 3 -> 500, 4 -> 800) and
//! the drop scoring (soft 1/cell, hard 2/cell) reproduce the observed scheme
//! exactly. All other events are pure addition of a fixed magnitude; the
//! event kind is descriptive, not behavioral.

use serde::Serialize;

use crate::types::{
    BRICK_POINTS, FOOD_POINTS, HARD_DROP_POINTS, LINE_SCORES, PAIR_POINTS, PIPE_POINTS,
    RALLY_POINTS, ROUND_POINTS, SOFT_DROP_POINTS,
};

/// Named, discrete scoring events. Score never decays continuously; every
/// point increment flows through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// Compound event: magnitude follows the tiered line-clear table
    LinesCleared(usize),
    SoftDrop { cells: u32 },
    HardDrop { cells: u32 },
    FoodEaten,
    BrickDestroyed,
    PipePassed,
    PairMatched,
    RallyWon,
    RoundMatched,
}

impl ScoreEvent {
    /// Point value of the event. Line clears beyond four score the
    /// four-line tier.
    pub fn points(&self) -> u32 {
        match *self {
            ScoreEvent::LinesCleared(lines) => LINE_SCORES[lines.min(4)],
            ScoreEvent::SoftDrop { cells } => SOFT_DROP_POINTS * cells,
            ScoreEvent::HardDrop { cells } => HARD_DROP_POINTS * cells,
            ScoreEvent::FoodEaten => FOOD_POINTS,
            ScoreEvent::BrickDestroyed => BRICK_POINTS,
            ScoreEvent::PipePassed => PIPE_POINTS,
            ScoreEvent::PairMatched => PAIR_POINTS,
            ScoreEvent::RallyWon => RALLY_POINTS,
            ScoreEvent::RoundMatched => ROUND_POINTS,
        }
    }
}

/// Monotonic score accumulator with a level counter.
///
/// Score is non-negative and non-decreasing within a session; level only
/// moves up, gated on an explicit progress condition supplied by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreTracker {
    score: u32,
    level: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Apply one scoring event; returns the points added
    pub fn apply(&mut self, event: ScoreEvent) -> u32 {
        let points = event.points();
        self.score = self.score.saturating_add(points);
        points
    }

    /// Increment the level when the progress condition holds
    pub fn maybe_advance_level(&mut self, progressed: bool) -> bool {
        if progressed {
            self.level += 1;
        }
        progressed
    }

    /// Raise the level to a rules-computed target (e.g. lines / 10). The
    /// level never moves backwards.
    pub fn raise_level_to(&mut self, target: u32) {
        self.level = self.level.max(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(ScoreEvent::LinesCleared(0).points(), 0);
        assert_eq!(ScoreEvent::LinesCleared(1).points(), 100);
        assert_eq!(ScoreEvent::LinesCleared(2).points(), 300);
        assert_eq!(ScoreEvent::LinesCleared(3).points(), 500);
        assert_eq!(ScoreEvent::LinesCleared(4).points(), 800);
        // Beyond the table, score the top tier
        assert_eq!(ScoreEvent::LinesCleared(7).points(), 800);
    }

    #[test]
    fn test_observed_score_sequence() {
        // single line, then a tetris, then a soft drop, then a 10-row hard
        // drop: 100 + 800 + 1 + 20 = 921
        let mut tracker = ScoreTracker::new();
        tracker.apply(ScoreEvent::LinesCleared(1));
        assert_eq!(tracker.score(), 100);
        tracker.apply(ScoreEvent::LinesCleared(4));
        assert_eq!(tracker.score(), 900);
        tracker.apply(ScoreEvent::SoftDrop { cells: 1 });
        assert_eq!(tracker.score(), 901);
        tracker.apply(ScoreEvent::HardDrop { cells: 10 });
        assert_eq!(tracker.score(), 921);
    }

    #[test]
    fn test_flat_events() {
        let mut tracker = ScoreTracker::new();
        for _ in 0..6 {
            tracker.apply(ScoreEvent::FoodEaten);
        }
        assert_eq!(tracker.score(), 60);

        let mut tracker = ScoreTracker::new();
        for _ in 0..15 {
            tracker.apply(ScoreEvent::BrickDestroyed);
        }
        assert_eq!(tracker.score(), 150);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut tracker = ScoreTracker::new();
        let mut last = 0;
        let events = [
            ScoreEvent::PipePassed,
            ScoreEvent::LinesCleared(0),
            ScoreEvent::RallyWon,
            ScoreEvent::SoftDrop { cells: 0 },
            ScoreEvent::PairMatched,
        ];
        for event in events {
            tracker.apply(event);
            assert!(tracker.score() >= last);
            last = tracker.score();
        }
    }

    #[test]
    fn test_level_progression() {
        let mut tracker = ScoreTracker::new();
        assert!(!tracker.maybe_advance_level(false));
        assert_eq!(tracker.level(), 0);
        assert!(tracker.maybe_advance_level(true));
        assert_eq!(tracker.level(), 1);

        tracker.raise_level_to(4);
        assert_eq!(tracker.level(), 4);
        // Never backwards
        tracker.raise_level_to(2);
        assert_eq!(tracker.level(), 4);
    }
}
