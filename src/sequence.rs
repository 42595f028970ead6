//! Turn sequence engine
//!
//! Turn-based logic shared by the matching games: the grows-by-one pattern
//! matcher (Simon-style), the shuffled pair deck (memory-style) and the
//! k-in-a-row winner detector generalized to NxN boards (tic-tac-toe-style).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Cell, Outcome, SimError};

/// Ordered symbol sequence over a fixed finite alphabet.
///
/// Invariant: the sequence grows by exactly one symbol per completed round,
/// so its length always equals the current round level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    alphabet: u8,
    symbols: Vec<u8>,
}

impl Sequence {
    /// Create an empty sequence. An empty alphabet is rejected at
    /// construction time.
    pub fn new(alphabet: u8) -> Result<Self, SimError> {
        if alphabet == 0 {
            return Err(SimError::InvalidConfig("sequence alphabet must be nonempty"));
        }
        Ok(Self {
            alphabet,
            symbols: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// True iff `input` is no longer than the sequence and matches it
    /// element-wise from the start
    pub fn matches_prefix(&self, input: &[u8]) -> bool {
        input.len() <= self.symbols.len()
            && input.iter().zip(self.symbols.iter()).all(|(a, b)| a == b)
    }

    /// True iff `input` reproduces the whole sequence
    pub fn is_complete_match(&self, input: &[u8]) -> bool {
        input.len() == self.symbols.len() && self.matches_prefix(input)
    }

    /// Append one symbol drawn uniformly from the alphabet. Callers invoke
    /// this only after a full, correct match of the previous sequence.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.symbols.push(rng.random_range(0..self.alphabet));
    }
}

/// Build a memory-style deck: two cards per symbol, shuffled by the injected
/// RNG. The result is always a permutation of the pair multiset, so every
/// symbol has exactly one matching partner. An empty deck is rejected at
/// construction time.
pub fn shuffled_pairs<R: Rng + ?Sized>(pairs: u8, rng: &mut R) -> Result<Vec<u8>, SimError> {
    if pairs == 0 {
        return Err(SimError::InvalidConfig("pair deck must be nonempty"));
    }
    let mut deck: Vec<u8> = (0..pairs).flat_map(|s| [s, s]).collect();
    deck.shuffle(rng);
    Ok(deck)
}

/// Find the owner of a completed win line on a flat board.
///
/// Scan order over `lines` decides precedence: the first line whose cells are
/// all non-empty and equal wins. With no winning line, a board without empty
/// cells is a tie, otherwise the game is ongoing. Pure: the same board always
/// yields the same result. Lines with out-of-range indices never match.
pub fn check_winner(board: &[Cell], lines: &[Vec<usize>]) -> Outcome {
    for line in lines {
        let Some(&first_idx) = line.first() else {
            continue;
        };
        let Some(&owner) = board.get(first_idx) else {
            continue;
        };
        if owner != 0 && line.iter().all(|&i| board.get(i) == Some(&owner)) {
            return Outcome::Win(owner);
        }
    }

    if board.iter().all(|&c| c != 0) {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

/// Generate every k-in-a-row winning index tuple for an n x n board, in
/// row, column, down-right diagonal, down-left diagonal order. For n = k = 3
/// this reproduces the classic eight tic-tac-toe lines in their observed
/// precedence order.
pub fn win_lines(n: usize, k: usize) -> Result<Vec<Vec<usize>>, SimError> {
    if n == 0 || k == 0 || k > n {
        return Err(SimError::InvalidConfig(
            "win lines need 0 < k <= n board dimensions",
        ));
    }

    let mut lines = Vec::new();
    let span = n - k;

    for r in 0..n {
        for c0 in 0..=span {
            lines.push((0..k).map(|i| r * n + c0 + i).collect());
        }
    }
    for c in 0..n {
        for r0 in 0..=span {
            lines.push((0..k).map(|i| (r0 + i) * n + c).collect());
        }
    }
    for r0 in 0..=span {
        for c0 in 0..=span {
            lines.push((0..k).map(|i| (r0 + i) * n + c0 + i).collect());
        }
    }
    for r0 in 0..=span {
        for c0 in (k - 1)..n {
            lines.push((0..k).map(|i| (r0 + i) * n + c0 - i).collect());
        }
    }

    Ok(lines)
}
