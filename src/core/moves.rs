//! Move representation.
//!
//! A move is one of four closed shapes. Captures are part of the move
//! itself: a placement or slide that closes a mill is only legal together
//! with the point it captures, so every move is fully specified.
//!
//! ## Example
//!
//! ```
//! use muhle_rules::core::{Move, Point};
//!
//! let mv = Move::slide_capture(Point::new(4), Point::new(7), Point::new(12));
//! assert!(mv.is_capture());
//! assert_eq!(mv.from(), Some(Point::new(4)));
//! assert_eq!(mv.to(), Point::new(7));
//! assert_eq!(mv.to_string(), "d6-d5xe4");
//! ```

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;
use super::point::Point;

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new piece on an empty point.
    Place { to: Point },
    /// Place a new piece, closing a mill, and capture an opponent piece.
    PlaceCapture { to: Point, capture: Point },
    /// Slide (or fly) a piece to an empty point.
    Slide { from: Point, to: Point },
    /// Slide (or fly) a piece, closing a mill, and capture an opponent piece.
    SlideCapture { from: Point, to: Point, capture: Point },
}

impl Move {
    #[must_use]
    pub const fn place(to: Point) -> Self {
        Move::Place { to }
    }

    #[must_use]
    pub const fn place_capture(to: Point, capture: Point) -> Self {
        Move::PlaceCapture { to, capture }
    }

    #[must_use]
    pub const fn slide(from: Point, to: Point) -> Self {
        Move::Slide { from, to }
    }

    #[must_use]
    pub const fn slide_capture(from: Point, to: Point, capture: Point) -> Self {
        Move::SlideCapture { from, to, capture }
    }

    /// Destination point.
    #[must_use]
    pub const fn to(&self) -> Point {
        match *self {
            Move::Place { to }
            | Move::PlaceCapture { to, .. }
            | Move::Slide { to, .. }
            | Move::SlideCapture { to, .. } => to,
        }
    }

    /// Source point, for slides.
    #[must_use]
    pub const fn from(&self) -> Option<Point> {
        match *self {
            Move::Slide { from, .. } | Move::SlideCapture { from, .. } => Some(from),
            Move::Place { .. } | Move::PlaceCapture { .. } => None,
        }
    }

    /// Captured point, for capturing moves.
    #[must_use]
    pub const fn capture(&self) -> Option<Point> {
        match *self {
            Move::PlaceCapture { capture, .. } | Move::SlideCapture { capture, .. } => Some(capture),
            Move::Place { .. } | Move::Slide { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture().is_some()
    }

    #[must_use]
    pub const fn is_placement(&self) -> bool {
        matches!(self, Move::Place { .. } | Move::PlaceCapture { .. })
    }

    /// Apply this move for `player` to a board.
    ///
    /// No legality checks beyond debug assertions; callers validate first.
    pub fn apply(&self, board: &mut Board, player: Player) {
        match *self {
            Move::Place { to } => board.place(to, player),
            Move::PlaceCapture { to, capture } => {
                board.place(to, player);
                board.remove(capture);
            }
            Move::Slide { from, to } => board.slide(from, to),
            Move::SlideCapture { from, to, capture } => {
                board.slide(from, to);
                board.remove(capture);
            }
        }
    }
}
