//! Pong - two paddles on a 600x300 court, first to seven
//!
//! The ball serves from center at (3, 2.5) per frame, bounces off the top
//! and bottom walls via the Collide bounds policy, and reflects off paddles
//! under the strict point-in-rect test. The CPU paddle eases toward the ball
//! at 6% of the remaining distance per frame. Time unit: one frame.

use rand::RngCore;

use crate::entity::{BoundsPolicy, Entity, Forces};
use crate::geometry::{clamp, Rect};
use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::session::{EventBuffer, GameRules};
use crate::types::{Outcome, SimError};

pub const COURT_WIDTH: f64 = 600.0;
pub const COURT_HEIGHT: f64 = 300.0;
const PADDLE_WIDTH: f64 = 10.0;
const PADDLE_HEIGHT: f64 = 50.0;
const PADDLE_SPEED: f64 = 5.0;
const SERVE_VELOCITY: (f64, f64) = (3.0, 2.5);
const CPU_EASE: f64 = 0.06;
const WIN_SCORE: u8 = 7;

pub const PLAYER: u8 = 1;
pub const CPU: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongAction {
    MoveUp,
    MoveDown,
}

/// Complete pong state
#[derive(Debug, Clone)]
pub struct PongGame {
    ball: Entity,
    player: Rect,
    cpu: Rect,
    scores: [u8; 2],
}

impl PongGame {
    pub fn new() -> Result<Self, SimError> {
        Ok(Self {
            ball: Self::serve(1.0),
            player: Rect::new(10.0, 125.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            cpu: Rect::new(580.0, 125.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            scores: [0, 0],
        })
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    pub fn scores(&self) -> [u8; 2] {
        self.scores
    }

    fn serve(direction: f64) -> Entity {
        Entity::at(COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0)
            .with_velocity(SERVE_VELOCITY.0 * direction, SERVE_VELOCITY.1)
            .with_bounds(BoundsPolicy::Collide)
    }
}

impl GameRules for PongGame {
    type Action = PongAction;

    fn apply_action(&mut self, action: Self::Action, _events: &mut EventBuffer) {
        let dy = match action {
            PongAction::MoveUp => -PADDLE_SPEED,
            PongAction::MoveDown => PADDLE_SPEED,
        };
        self.player.y = clamp(self.player.y + dy, 0.0, COURT_HEIGHT - PADDLE_HEIGHT);
    }

    fn integrate(&mut self, dt: f64) {
        self.ball.integrate(&Forces::default(), dt);

        // CPU tracking: ease toward centering the paddle on the ball
        let target = self.ball.y - PADDLE_HEIGHT / 2.0;
        self.cpu.y += (target - self.cpu.y) * CPU_EASE * dt;
        self.cpu.y = clamp(self.cpu.y, 0.0, COURT_HEIGHT - PADDLE_HEIGHT);
    }

    fn resolve_collisions(&mut self, events: &mut EventBuffer) {
        // Goals first: a ball past either goal line scores and re-serves
        // toward the side that conceded
        if self.ball.x < 0.0 {
            self.scores[1] += 1;
            self.ball = Self::serve(-1.0);
            return;
        }
        if self.ball.x > COURT_WIDTH {
            self.scores[0] += 1;
            events.push(ScoreEvent::RallyWon);
            self.ball = Self::serve(1.0);
            return;
        }

        // Top/bottom wall bounce
        self.ball.apply_bounds(COURT_WIDTH, COURT_HEIGHT);

        // Paddle reflection under the strict containment test
        if self.ball.dx < 0.0 && self.player.contains(self.ball.x, self.ball.y) {
            self.ball.x = self.player.right();
            self.ball.dx = -self.ball.dx;
        } else if self.ball.dx > 0.0 && self.cpu.contains(self.ball.x, self.ball.y) {
            self.ball.x = self.cpu.x;
            self.ball.dx = -self.ball.dx;
        }
    }

    fn advance_world(
        &mut self,
        _rng: &mut dyn RngCore,
        _events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        Ok(())
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        if self.scores[0] >= WIN_SCORE {
            Outcome::Win(PLAYER)
        } else if self.scores[1] >= WIN_SCORE {
            Outcome::Win(CPU)
        } else {
            Outcome::Ongoing
        }
    }
}
