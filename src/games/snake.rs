//! Snake - head-first cell movement on a 16x16 arena
//!
//! Movement advances one cell per step, reverse turns are rejected, food is
//! worth ten points and placed by the injected RNG on a free cell, and the
//! body grows by one segment per food eaten.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::session::{EventBuffer, GameRules};
use crate::types::{Outcome, SimError};

pub const ARENA_CELLS: i32 = 16;
const START_CELL: (i32, i32) = (7, 7);

/// Steps per time unit (one step per tick at dt = 1)
const STEP_INTERVAL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    Turn(Direction),
}

/// Complete snake state. The head is the front of the deque.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    body: VecDeque<(i32, i32)>,
    heading: Direction,
    next_heading: Direction,
    food: Option<(i32, i32)>,
    dead: bool,
    cleared: bool,
    step_timer: f64,
}

impl SnakeGame {
    pub fn new() -> Result<Self, SimError> {
        let mut body = VecDeque::new();
        body.push_back(START_CELL);
        Ok(Self {
            body,
            heading: Direction::Right,
            next_heading: Direction::Right,
            food: None,
            dead: false,
            cleared: false,
            step_timer: 0.0,
        })
    }

    pub fn body(&self) -> &VecDeque<(i32, i32)> {
        &self.body
    }

    pub fn food(&self) -> Option<(i32, i32)> {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    fn in_arena(cell: (i32, i32)) -> bool {
        cell.0 >= 0 && cell.0 < ARENA_CELLS && cell.1 >= 0 && cell.1 < ARENA_CELLS
    }

    fn place_food(&mut self, rng: &mut dyn RngCore) {
        let free: Vec<(i32, i32)> = (0..ARENA_CELLS)
            .flat_map(|x| (0..ARENA_CELLS).map(move |y| (x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();

        if free.is_empty() {
            // Every cell is snake: the arena is cleared
            self.cleared = true;
            self.food = None;
            return;
        }
        self.food = Some(free[rng.random_range(0..free.len())]);
    }

    fn step(&mut self, rng: &mut dyn RngCore, events: &mut EventBuffer) {
        self.heading = self.next_heading;
        let (dx, dy) = self.heading.delta();
        let head = self.body.front().copied().unwrap_or(START_CELL);
        let new_head = (head.0 + dx, head.1 + dy);

        if !Self::in_arena(new_head) || self.body.contains(&new_head) {
            self.dead = true;
            return;
        }

        self.body.push_front(new_head);
        if self.food == Some(new_head) {
            events.push(ScoreEvent::FoodEaten);
            self.place_food(rng);
        } else {
            self.body.pop_back();
        }
    }
}

impl GameRules for SnakeGame {
    type Action = SnakeAction;

    fn apply_action(&mut self, action: Self::Action, _events: &mut EventBuffer) {
        let SnakeAction::Turn(dir) = action;
        // Reverse prevention: a horizontal snake can only turn vertically
        // and vice versa
        if dir.is_horizontal() != self.heading.is_horizontal() {
            self.next_heading = dir;
        }
    }

    fn integrate(&mut self, dt: f64) {
        self.step_timer += dt;
    }

    fn resolve_collisions(&mut self, _events: &mut EventBuffer) {}

    fn advance_world(
        &mut self,
        rng: &mut dyn RngCore,
        events: &mut EventBuffer,
    ) -> Result<(), SimError> {
        if self.dead || self.cleared {
            return Ok(());
        }

        if self.food.is_none() {
            self.place_food(rng);
        }

        while self.step_timer >= STEP_INTERVAL && !self.dead && !self.cleared {
            self.step_timer -= STEP_INTERVAL;
            self.step(rng, events);
        }
        Ok(())
    }

    fn outcome(&self, _tracker: &ScoreTracker) -> Outcome {
        if self.dead {
            Outcome::Loss
        } else if self.cleared {
            Outcome::Win(1)
        } else {
            Outcome::Ongoing
        }
    }
}
