//! Move generation.
//!
//! `generate_moves` is a pure function from a board, side to move, ply
//! count and variant to the ordered list of legal moves. Mill tests and
//! capture eligibility are exposed for drivers that highlight mills.

pub mod generator;
pub mod mills;

pub use generator::{free_neighbors, generate_for, generate_moves, phase, Phase};
pub use mills::{all_pieces_in_mills, capture_targets, is_mill};
