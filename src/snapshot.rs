//! Immutable post-tick snapshot consumed by the external render collaborator.
//! The core never depends on what the presenter does with it.

use serde::Serialize;

use crate::session::Phase;
use crate::types::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub outcome: Outcome,
    pub score: u32,
    pub level: u32,
    pub ticks: u64,
    pub seed: u64,
}
