//! Rules engine.
//!
//! `GameState` enforces legality, applies moves and detects the end of the
//! game. `Referee` wraps it for drivers that want to be told about each
//! committed move.

pub mod engine;
pub mod outcome;
pub mod referee;

pub use engine::GameState;
pub use outcome::GameOver;
pub use referee::{MoveCommitted, MoveListener, NoListener, Referee};
