//! Flappy - a gravity-bound bird threading pipe gaps
//!
//! Gravity 0.3 per frame, flap impulse -7, pipes carry a 200px gap whose top
//! edge is placed by the injected RNG below 150px (350px column minus the
//! gap). One point per pipe passed; contact with a pipe or the ground ends
//! the run. Time unit: one frame.

use rand::{Rng, RngCore};

use crate::entity::{Entity, Forces};
use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::session::{EventBuffer, GameRules};
use crate::types::{Outcome, SimError};

pub const WORLD_WIDTH: f64 = 400.0;
pub const WORLD_HEIGHT: f64 = 600.0;
const BIRD_X: f64 = 100.0;
const BIRD_RADIUS: f64 = 15.0;
const GRAVITY: f64 = 0.3;
const FLAP_IMPULSE: f64 = -7.0;
const PIPE_WIDTH: f64 = 50.0;
const PIPE_GAP: f64 = 200.0;
const PIPE_MAX_TOP: f64 = 350.0 - PIPE_GAP;
const SCROLL_SPEED: f64 = 2.0;
const PIPE_SPACING: f64 = 220.0;
const PIPES_PER_LEVEL: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyAction {
    Flap,
}

/// One pipe pair: solid above `top_height` and below `bottom_y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub top_height: f64,
    pub bottom_y: f64,
    pub passed: bool,
    pub active: bool,
}

/// Complete flappy state
#[derive(Debug, Clone)]
pub struct FlappyGame {
    bird: Entity,
    pipes: Vec<Pipe>,
    pipes_passed: u32,
    dead: bool,
}

impl FlappyGame {
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            bird: Entity::at(BIRD_X, WORLD_HEIGHT / 2.0).with_radius(BIRD_RADIUS),
            pipes: Vec::new(),
            pipes_passed: 0,
            dead: false,
        })
    }

    pub fn bird(&self) -> &Entity {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn pipes_passed(&self) -> u32 {
        self.pipes_passed
    }

    fn spawn_pipe(&mut self, rng: &mut dyn RngCore) {
        let top_height = rng.random_range(0.0..PIPE_MAX_TOP);
        self.pipes.push(Pipe {
            x: WORLD_WIDTH,
            top_height,
            bottom_y: top_height + PIPE_GAP,
            passed: false,
            active: true,
        });
    }

    fn bird_hits(bird: &Entity, pipe: &Pipe) -> bool {
        let in_range =
            bird.x + bird.radius > pipe.x && bird.x - bird.radius < pipe.x + PIPE_WIDTH;
        in_range
            && (bird.y - bird.radius < pipe.top_height || bird.y + bird.radius > pipe.bottom_y)
    }
}

impl GameRules for FlappyGame {
    type Action = FlappyAction;

    fn apply_action(&mut self, action: Self::Action, _events: &mut EventBuffer) {
        let FlappyAction::Flap = action;
        if !self.dead {
            self.bird.apply_impulse(0.0, FLAP_IMPULSE);
        }
    }

    fn integrate(&mut self, dt: f64) {
        let forces = Forces {
            gravity: GRAVITY,
            ..Forces::default()
        };
        self.bird.integrate(&forces, dt);

        for pipe in &mut self.pipes {
            pipe.x -= SCROLL_SPEED * dt;
        }
    }

    fn resolve_collisions(&mut self, events: &mut EventBuffer) {
        if self.dead {
            return;
        }

        // Ceiling is soft, the ground is not
        if self.bird.y - self.bird.radius < 0.0 {
            self.bird.y = self.bird.radius;
            self.bird.dy = 0.0;
        }
        if self.bird.y + self.bird.radius > WORLD_HEIGHT {
            self.dead = true;
            return;
        }

        let bird = self.bird;
        let mut hit = false;
        let mut pipes_passed = 0;
        for pipe in &mut self.pipes {
            if !pipe.active {
                continue;
            }
            if Self::bird_hits(&bird, pipe) {
                hit = true;
                break;
            }
            if !pipe.passed && bird.x > pipe.x + PIPE_WIDTH {
                pipe.passed = true;
                pipes_passed += 1;
                events.push(ScoreEvent::PipePassed);
            }
        }
        if hit {
            self.dead = true;
            return;
        }
        self.pipes_passed += pipes_passed;
    }

    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        _events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        if self.dead {
            return Ok(());
        }

        // Keep a pipe incoming once the newest one has scrolled far enough
        let needs_pipe = self
            .pipes
            .last()
            .map(|p| p.x < WORLD_WIDTH - PIPE_SPACING)
            .unwrap_or(true);
        if needs_pipe {
            self.spawn_pipe(rng);
        }

        // Compaction pass: retire pipes that scrolled off the left edge
        for pipe in &mut self.pipes {
            if pipe.x + PIPE_WIDTH < 0.0 {
                pipe.active = false;
            }
        }
        self.pipes.retain(|p| p.active);
        Ok(())
    }

    fn update_level(&self, tracker: &mut ScoreTracker) {
        tracker.raise_level_to(self.pipes_passed / PIPES_PER_LEVEL);
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        if self.dead {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }
}
