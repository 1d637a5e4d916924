//! Text formats for positions and moves.
//!
//! Both codecs use the 24-entry coordinate table from `core::point`
//! (`a7` is point 0, `g1` is point 23). `Display` and `FromStr` on
//! `Position` and `Move` are implemented here.

pub mod moves;
pub mod position;

pub use moves::{decode_move, encode_move, CAPTURE_SEPARATOR, SLIDE_SEPARATOR};
pub use position::{decode_position, encode_position};
