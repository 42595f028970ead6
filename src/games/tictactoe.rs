//! Tic-tac-toe - player X against a random-move CPU
//!
//! A 3x3 flat board with the eight classic win lines checked in row, column,
//! diagonal order. The player places mark 1 via an action; the CPU answers
//! with mark 2 on a uniformly random empty cell during the world stage.

use rand::{Rng, RngCore};

use crate::scoring::ScoreTracker;
use crate::sequence::{check_winner, win_lines};
use crate::session::{EventBuffer, GameRules};
use crate::types::{Cell, Outcome, SimError};

pub const BOARD_SIZE: usize = 3;
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const PLAYER_MARK: Cell = 1;
pub const CPU_MARK: Cell = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeAction {
    Place(usize),
}

/// Complete tic-tac-toe state
#[derive(Debug, Clone)]
pub struct TicTacToe {
    board: [Cell; CELL_COUNT],
    lines: Vec<Vec<usize>>,
    cpu_pending: bool,
}

impl TicTacToe {
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            board: [0; CELL_COUNT],
            lines: win_lines(BOARD_SIZE, BOARD_SIZE)?,
            cpu_pending: false,
        })
    }

    pub fn board(&self) -> &[Cell] {
        &self.board
    }

    fn winner(&self) -> Outcome {
        check_winner(&self.board, &self.lines)
    }
}

impl GameRules for TicTacToe {
    type Action = TicTacToeAction;

    fn apply_action(&mut self, action: Self::Action, _events: &mut EventBuffer) {
        let TicTacToeAction::Place(index) = action;
        // Occupied cells and out-of-range indices are ignored, as is any
        // move placed after the game has been decided
        if self.cpu_pending || self.winner() != Outcome::Ongoing {
            return;
        }
        if let Some(cell) = self.board.get_mut(index) {
            if *cell == 0 {
                *cell = PLAYER_MARK;
                self.cpu_pending = true;
            }
        }
    }

    fn integrate(&mut self, _dt: f64) {}

    fn resolve_collisions(&mut self, _events: &mut EventBuffer) {}

    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        _events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        if !self.cpu_pending {
            return Ok(());
        }
        self.cpu_pending = false;

        // CPU answers only while the game is still open
        if self.winner() != Outcome::Ongoing {
            return Ok(());
        }
        let empties: Vec<usize> = (0..CELL_COUNT).filter(|&i| self.board[i] == 0).collect();
        if !empties.is_empty() {
            self.board[empties[rng.random_range(0..empties.len())]] = CPU_MARK;
        }
        Ok(())
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        self.winner()
    }
}
