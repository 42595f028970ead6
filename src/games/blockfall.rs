//! Blockfall - the falling-block rule set on a 10x20 grid
//!
//! The seven shape matrices carry their occupant tag (1-7) in the filled
//! cells, rotation is the shared transpose-and-reverse contract, scoring
//! follows the tiered line-clear table plus drop points, and the level rises
//! every ten cleared lines.

use rand::{Rng, RngCore};

use crate::grid::{rotate_cw, Grid};
use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::session::{EventBuffer, GameRules};
use crate::types::{Cell, Outcome, SimError, LINES_PER_LEVEL};

pub const BOARD_ROWS: usize = 20;
pub const BOARD_COLS: usize = 10;
const SPAWN_COL: i32 = 3;

/// Gravity intervals by level, floored once the table runs out
const DROP_INTERVALS: [f64; 9] = [1.0, 0.8, 0.65, 0.5, 0.4, 0.32, 0.25, 0.2, 0.16];
const DROP_INTERVAL_FLOOR: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockfallAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
}

/// The seven shape matrices (filled cells carry the piece tag)
fn shape(kind: u8) -> Vec<Vec<Cell>> {
    match kind {
        1 => vec![vec![1, 1, 1, 1]],
        2 => vec![vec![2, 0, 0], vec![2, 2, 2]],
        3 => vec![vec![0, 0, 3], vec![3, 3, 3]],
        4 => vec![vec![4, 4], vec![4, 4]],
        5 => vec![vec![0, 5, 5], vec![5, 5, 0]],
        6 => vec![vec![0, 6, 0], vec![6, 6, 6]],
        _ => vec![vec![7, 7, 0], vec![0, 7, 7]],
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Piece {
    cells: Vec<Vec<Cell>>,
    row: i32,
    col: i32,
}

/// Complete blockfall state
#[derive(Debug, Clone)]
pub struct Blockfall {
    grid: Grid,
    piece: Option<Piece>,
    lines: u32,
    dead: bool,
    lock_pending: bool,
    drop_timer: f64,
}

impl Blockfall {
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            grid: Grid::new(BOARD_ROWS, BOARD_COLS)?,
            piece: None,
            lines: 0,
            dead: false,
            lock_pending: false,
            drop_timer: 0.0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn has_active_piece(&self) -> bool {
        self.piece.is_some()
    }

    fn can_place(&self, cells: &[Vec<Cell>], row: i32, col: i32) -> bool {
        cells.iter().enumerate().all(|(r, line)| {
            line.iter()
                .enumerate()
                .all(|(c, &v)| v == 0 || !self.grid.occupied(row + r as i32, col + c as i32))
        })
    }

    fn drop_distance(&self, piece: &Piece) -> u32 {
        let mut distance = 0;
        while self.can_place(&piece.cells, piece.row + distance as i32 + 1, piece.col) {
            distance += 1;
        }
        distance
    }

    fn drop_interval(&self) -> f64 {
        let level = (self.lines / LINES_PER_LEVEL) as usize;
        DROP_INTERVALS
            .get(level)
            .copied()
            .unwrap_or(DROP_INTERVAL_FLOOR)
    }

    /// Write the settled piece into the grid, compact full rows and report
    /// the clear as a score event
    fn lock(&mut self, events: &mut EventBuffer) -> Result<(), SimError> {
        let Some(piece) = self.piece.take() else {
            return Ok(());
        };

        for (r, line) in piece.cells.iter().enumerate() {
            for (c, &v) in line.iter().enumerate() {
                if v != 0 {
                    self.grid.set(
                        (piece.row + r as i32) as usize,
                        (piece.col + c as i32) as usize,
                        v,
                    )?;
                }
            }
        }

        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            self.lines += cleared as u32;
            events.push(ScoreEvent::LinesCleared(cleared));
        }
        Ok(())
    }

    fn spawn(&mut self, rng: &mut dyn RngCore) {
        let kind = rng.random_range(1..=7u8);
        let cells = shape(kind);
        if !self.can_place(&cells, 0, SPAWN_COL) {
            self.dead = true;
            return;
        }
        self.piece = Some(Piece {
            cells,
            row: 0,
            col: SPAWN_COL,
        });
    }
}

impl GameRules for Blockfall {
    type Action = BlockfallAction;

    fn apply_action(&mut self, action: Self::Action, events: &mut EventBuffer) {
        if self.dead || self.lock_pending {
            return;
        }
        let Some(mut piece) = self.piece.take() else {
            return;
        };

        match action {
            BlockfallAction::MoveLeft => {
                if self.can_place(&piece.cells, piece.row, piece.col - 1) {
                    piece.col -= 1;
                }
            }
            BlockfallAction::MoveRight => {
                if self.can_place(&piece.cells, piece.row, piece.col + 1) {
                    piece.col += 1;
                }
            }
            BlockfallAction::Rotate => {
                let rotated = rotate_cw(&piece.cells);
                if self.can_place(&rotated, piece.row, piece.col) {
                    piece.cells = rotated;
                }
            }
            BlockfallAction::SoftDrop => {
                if self.can_place(&piece.cells, piece.row + 1, piece.col) {
                    piece.row += 1;
                    events.push(ScoreEvent::SoftDrop { cells: 1 });
                }
            }
            BlockfallAction::HardDrop => {
                let cells = self.drop_distance(&piece);
                piece.row += cells as i32;
                events.push(ScoreEvent::HardDrop { cells });
                // The grid mutation itself happens in the world stage
                self.lock_pending = true;
            }
        }

        self.piece = Some(piece);
    }

    fn integrate(&mut self, dt: f64) {
        self.drop_timer += dt;
    }

    fn resolve_collisions(&mut self, _events: &mut EventBuffer) {}

    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        if self.dead {
            return Ok(());
        }

        if self.lock_pending {
            self.lock_pending = false;
            self.lock(events)?;
        }

        if self.piece.is_none() {
            self.drop_timer = 0.0;
            self.spawn(rng);
            return Ok(());
        }

        // Gravity
        if self.drop_timer >= self.drop_interval() {
            self.drop_timer = 0.0;
            if let Some(mut piece) = self.piece.take() {
                if self.can_place(&piece.cells, piece.row + 1, piece.col) {
                    piece.row += 1;
                    self.piece = Some(piece);
                } else {
                    self.piece = Some(piece);
                    self.lock(events)?;
                }
            }
        }

        Ok(())
    }

    fn update_level(&self, tracker: &mut ScoreTracker) {
        tracker.raise_level_to(self.lines / LINES_PER_LEVEL);
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        if self.dead {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }
}
