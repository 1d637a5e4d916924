//! Core data types: players, points, boards, positions, moves, configuration, RNG.
//!
//! Everything here is a plain value type. Rules live in `movegen` and
//! `rules`; text formats live in `notation`.

pub mod player;
pub mod point;
pub mod board;
pub mod position;
pub mod moves;
pub mod config;
pub mod rng;

pub use player::{Node, Player};
pub use point::{Point, UnknownCoordinate, COORDINATES, POINT_COUNT};
pub use board::Board;
pub use position::Position;
pub use moves::Move;
pub use config::{RulesConfig, Variant, DEFAULT_FIFTY_MOVE_PLIES, DEFAULT_REPETITION_COUNT};
pub use rng::GameRng;
