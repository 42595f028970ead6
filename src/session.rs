//! Orchestration harness - drives game rules through a discrete tick loop
//!
//! The session owns the rules, the score tracker, the injected RNG stream
//! and the phase machine. Within one Running tick the stages run in a fixed
//! order, so a session is fully deterministic given the same seed, the same
//! action stream and the same `dt` series.

use arrayvec::ArrayVec;
use log::debug;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::snapshot::SessionSnapshot;
use crate::types::{Outcome, SimError, MAX_QUEUED_ACTIONS};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Ready,
    Running,
    Paused,
    Ended(Outcome),
}

/// Score events collected during one tick and applied in stage 5.
/// Reused across ticks, so the hot path does not allocate after warmup.
pub type EventBuffer = Vec<ScoreEvent>;

/// Game-specific rules plugged into the session tick pipeline.
///
/// Stage mapping: `apply_action` (1), `integrate` (2), `resolve_collisions`
/// (3), `advance_world` (4); the session applies collected score events (5)
/// and recomputes the outcome (6). `advance_world` is the only stage with
/// access to the injected RNG and the only one allowed to fail.
pub trait GameRules {
    type Action: Copy;

    /// Stage 1: apply one queued input action
    fn apply_action(&mut self, action: Self::Action, events: &mut EventBuffer);

    /// Stage 2: integrate continuous entities by `dt`
    fn integrate(&mut self, dt: f64);

    /// Stage 3: detect and resolve collisions, emitting score events
    fn resolve_collisions(&mut self, events: &mut EventBuffer);

    /// Stage 4: mutate grid/sequence world state (spawns, compaction,
    /// sequence growth). Errors here fault the session.
    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        events: &mut EventBuffer,
    ) -> Result<(), SimError>;

    /// Stage 5 hook: let the rules push the level forward
    fn update_level(&self, _tracker: &mut ScoreTracker) {}

    /// Stage 6: classify the post-tick state
    fn outcome(&self, tracker: &ScoreTracker) -> Outcome;
}

/// A single game session: phase machine plus tick driver.
///
/// The external frame scheduler calls [`Session::tick`] with an explicit
/// `dt`; the input collaborator queues actions between ticks.
pub struct Session<R: GameRules> {
    rules: R,
    tracker: ScoreTracker,
    rng: Pcg32,
    phase: Phase,
    queued: ArrayVec<R::Action, MAX_QUEUED_ACTIONS>,
    events: EventBuffer,
    ticks: u64,
    seed: u64,
}

impl<R: GameRules> Session<R> {
    /// Create a session in the Ready phase with a seeded RNG stream
    pub fn new(rules: R, seed: u64) -> Self {
        Self {
            rules,
            tracker: ScoreTracker::new(),
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Ready,
            queued: ArrayVec::new(),
            events: EventBuffer::new(),
            ticks: 0,
            seed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ready -> Running on the start signal; any other phase is unchanged
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
            debug!("session started (seed {})", self.seed);
        }
    }

    /// Toggle Running <-> Paused. Ready and Ended are unchanged.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Queue an input action for the next tick. Returns false (and drops the
    /// action) unless the session is Running with queue capacity left.
    pub fn queue_action(&mut self, action: R::Action) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.queued.try_push(action).is_ok()
    }

    /// Advance the simulation by one tick of `dt` seconds (or frames; the
    /// unit is whatever the rules integrate against). Outside the Running
    /// phase this is a no-op, so Paused and Ended states never mutate.
    pub fn tick(&mut self, dt: f64) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }

        self.events.clear();

        // 1. apply queued input
        let pending = std::mem::take(&mut self.queued);
        for action in pending {
            self.rules.apply_action(action, &mut self.events);
        }

        // 2. integrate entities
        self.rules.integrate(dt);

        // 3. resolve collisions
        self.rules.resolve_collisions(&mut self.events);

        // 4. mutate world state; a stage error faults the session instead of
        // crashing the tick loop
        if let Err(err) = self.rules.advance_world(&mut self.rng, &mut self.events) {
            debug!("tick {} faulted: {}", self.ticks, err);
            self.phase = Phase::Ended(Outcome::Faulted);
            return self.phase;
        }

        // 5. update score and level
        for event in self.events.drain(..) {
            self.tracker.apply(event);
        }
        self.rules.update_level(&mut self.tracker);

        // 6. recompute the terminal state
        self.ticks += 1;
        let outcome = self.rules.outcome(&self.tracker);
        if outcome.is_terminal() {
            debug!(
                "session ended after {} ticks: {:?}, score {}",
                self.ticks,
                outcome,
                self.tracker.score()
            );
            self.phase = Phase::Ended(outcome);
        }

        self.phase
    }

    /// Immutable post-tick snapshot for the render collaborator
    pub fn snapshot(&self) -> SessionSnapshot {
        let outcome = match self.phase {
            Phase::Ended(outcome) => outcome,
            _ => Outcome::Ongoing,
        };
        SessionSnapshot {
            phase: self.phase,
            outcome,
            score: self.tracker.score(),
            level: self.tracker.level(),
            ticks: self.ticks,
            seed: self.seed,
        }
    }
}
