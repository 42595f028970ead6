//! Core types shared across the simulation
//! This module contains pure data types and the compatibility constants

use serde::Serialize;
use thiserror::Error;

/// Cell value on a grid (0 = empty, positive = occupant tag)
pub type Cell = u8;

/// Line clear scoring table, indexed by lines cleared in one compaction
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Drop scoring (points per cell)
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Flat event magnitudes observed across the game variants
pub const FOOD_POINTS: u32 = 10;
pub const BRICK_POINTS: u32 = 10;
pub const PIPE_POINTS: u32 = 1;
pub const PAIR_POINTS: u32 = 1;
pub const RALLY_POINTS: u32 = 1;
pub const ROUND_POINTS: u32 = 1;

/// Level advances every 10 cleared lines in grid-fall games
pub const LINES_PER_LEVEL: u32 = 10;

/// Upper bound on actions accepted between two ticks
pub const MAX_QUEUED_ACTIONS: usize = 16;

/// Terminal classification of a game session.
///
/// `Win` carries the occupant tag of the owning side (1-based player mark).
/// `Faulted` is the distinguishable failure outcome the session enters when a
/// tick stage reports an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ongoing,
    Win(u8),
    Loss,
    Tie,
    Faulted,
}

impl Outcome {
    /// True for every variant except `Ongoing`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Errors surfaced by the simulation core.
///
/// All of these are precondition violations: the core touches no I/O, so
/// there is no recoverable-vs-fatal distinction. Out-of-range grid access
/// fails fast instead of clamping; malformed configuration fails at
/// construction time rather than at tick time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
