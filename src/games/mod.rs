//! Game rule sets built on the shared simulation components
//!
//! Each module is a self-contained [`GameRules`](crate::session::GameRules)
//! implementation; the session drives all of them through the same tick
//! pipeline. Variants not listed here (breakout, asteroids, memory) are
//! compositions of the same components: bounds policies, circle overlap,
//! grid compaction and pair matching all live in the shared modules.

pub mod blockfall;
pub mod flappy;
pub mod pong;
pub mod simon;
pub mod snake;
pub mod tictactoe;

pub use blockfall::{Blockfall, BlockfallAction};
pub use flappy::{FlappyAction, FlappyGame};
pub use pong::{PongAction, PongGame};
pub use simon::{SimonAction, SimonGame};
pub use snake::{SnakeAction, SnakeGame};
pub use tictactoe::{TicTacToe, TicTacToeAction};
