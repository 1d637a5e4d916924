//! # muhle-rules
//!
//! Rules engine for Mühle (Nine and Twelve Men's Morris).
//!
//! Tracks the board, enumerates the strictly legal moves for each phase of
//! the game, applies moves and detects wins and draws.
//!
//! ## Design Principles
//!
//! 1. **Complete moves**: a move that closes a mill carries its capture, so
//!    the legal move list is the whole decision a side has to make.
//!
//! 2. **Pure generation**: `movegen::generate_moves` is a function of the
//!    board, side to move, ply count and variant. Nothing is cached globally.
//!
//! 3. **One owner**: a `GameState` is the single mutable record of a game.
//!    It is cheap to clone for drivers that need snapshots.
//!
//! ## Modules
//!
//! - `core`: Players, points, boards, positions, moves, configuration, RNG
//! - `topology`: Adjacency and mill tables for both variants
//! - `movegen`: Legal move generation and mill detection
//! - `rules`: Game state, end-of-game rules, move notifications
//! - `notation`: Position and move text formats
//! - `protocol`: Command and reply lines for external search engines
//! - `playout`: Seeded random games
//!
//! ## Example
//!
//! ```
//! use muhle_rules::{GameOver, GameState, Move, Variant};
//!
//! let mut game = GameState::new(Variant::Nine);
//! for text in ["a7", "a1", "d7", "g1"] {
//!     let mv: Move = text.parse().unwrap();
//!     game.apply_move(mv).unwrap();
//! }
//!
//! // g7 closes the top row and must name a capture
//! assert!(game.legal_moves().iter().any(|mv| mv.to_string() == "g7xa1"));
//! assert_eq!(game.game_over(), GameOver::None);
//! assert_eq!(game.position().to_string(), "w:wa7,d7:ba1,g1:3");
//! ```

pub mod core;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod playout;
pub mod protocol;
pub mod rules;
pub mod topology;

// Re-export commonly used types
pub use crate::core::{
    Board, GameRng, Move, Node, Player, Point, Position, RulesConfig, Variant,
};

pub use crate::error::{Result, RulesError};

pub use crate::movegen::{generate_moves, Phase};

pub use crate::notation::{decode_move, decode_position, encode_move, encode_position};

pub use crate::playout::{random_game, PlayoutRecord};

pub use crate::protocol::{EngineCommand, EngineReply, SearchBudget, SearchRequest};

pub use crate::rules::{GameOver, GameState, MoveCommitted, MoveListener, Referee};

pub use crate::topology::Topology;
