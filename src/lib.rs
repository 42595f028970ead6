//! arcade-core - deterministic simulation core for 2D grid and entity games
//!
//! The crate separates reusable mechanics from per-game rules. Shared
//! components live at the top level:
//!
//! - [`grid`]: bounded cell grid with row compaction and matrix rotation
//! - [`entity`]: point entities under gravity/friction/thrust with wall policies
//! - [`geometry`]: rectangles, overlap tests and coordinate wrapping
//! - [`sequence`]: grows-by-one pattern matching and k-in-a-row detection
//! - [`scoring`]: event-based score and level tracking
//! - [`session`]: the phase machine and fixed-order tick pipeline
//!
//! Concrete rule sets under [`games`] plug into [`session::Session`] through
//! the [`session::GameRules`] trait. Everything is synchronous and
//! single-threaded; randomness enters only through the seeded RNG the session
//! owns, so a session replays identically from `(rules, seed, actions, dt)`.
//!
//! ```
//! use arcade_core::games::{SnakeAction, SnakeGame};
//! use arcade_core::session::Session;
//! use arcade_core::games::snake::Direction;
//!
//! let mut session = Session::new(SnakeGame::new().unwrap(), 42);
//! session.start();
//! session.queue_action(SnakeAction::Turn(Direction::Right));
//! session.tick(1.0);
//! assert_eq!(session.ticks(), 1);
//! ```

pub mod entity;
pub mod games;
pub mod geometry;
pub mod grid;
pub mod scoring;
pub mod sequence;
pub mod session;
pub mod snapshot;
pub mod types;

pub use scoring::{ScoreEvent, ScoreTracker};
pub use session::{GameRules, Phase, Session};
pub use snapshot::SessionSnapshot;
pub use types::{Cell, Outcome, SimError};
