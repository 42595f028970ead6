//! Simon - repeat a sequence that grows by one each round
//!
//! Four colors, one press per action. Presses are validated against the
//! sequence prefix; the first mismatch ends the game. A full match completes
//! the round: the sequence gains one symbol and the level follows the
//! sequence length.

use rand::RngCore;

use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::sequence::Sequence;
use crate::session::{EventBuffer, GameRules};
use crate::types::{Outcome, SimError};

pub const COLOR_COUNT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimonAction {
    Press(u8),
}

/// Complete simon state
#[derive(Debug, Clone)]
pub struct SimonGame {
    sequence: Sequence,
    input: Vec<u8>,
    round_done: bool,
    failed: bool,
}

impl SimonGame {
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            sequence: Sequence::new(COLOR_COUNT)?,
            input: Vec::new(),
            round_done: false,
            failed: false,
        })
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }
}

impl GameRules for SimonGame {
    type Action = SimonAction;

    fn apply_action(&mut self, action: Self::Action, events: &mut EventBuffer) {
        let SimonAction::Press(symbol) = action;
        if self.failed || self.round_done || self.sequence.is_empty() {
            return;
        }

        self.input.push(symbol);
        if !self.sequence.matches_prefix(&self.input) {
            self.failed = true;
        } else if self.sequence.is_complete_match(&self.input) {
            self.round_done = true;
            events.push(ScoreEvent::RoundMatched);
        }
    }

    fn integrate(&mut self, _dt: f64) {}

    fn resolve_collisions(&mut self, _events: &mut EventBuffer) {}

    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        _events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        if self.failed {
            return Ok(());
        }

        // First round, or a completed one: grow the sequence by exactly one
        if self.sequence.is_empty() || self.round_done {
            self.sequence.advance(rng);
            self.input.clear();
            self.round_done = false;
        }
        Ok(())
    }

    fn update_level(&self, tracker: &mut ScoreTracker) {
        // The sequence length is the current level
        tracker.raise_level_to(self.sequence.len() as u32);
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        if self.failed {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }
}
