//! Move text codec.
//!
//! | Move           | Text          |
//! |----------------|---------------|
//! | `Place`        | `d5`          |
//! | `PlaceCapture` | `d5xe4`       |
//! | `Slide`        | `d6-d5`       |
//! | `SlideCapture` | `d6-d5xe4`    |

use std::fmt;
use std::str::FromStr;

use crate::core::{Move, Point};
use crate::error::{Result, RulesError};

/// Separates source and destination.
pub const SLIDE_SEPARATOR: char = '-';

/// Introduces the captured point.
pub const CAPTURE_SEPARATOR: char = 'x';

/// Text form of a move.
#[must_use]
pub fn encode_move(mv: &Move) -> String {
    mv.to_string()
}

/// Parse the text form of a move.
///
/// The shape is decided by which separators are present. Every token must
/// be exactly one board coordinate.
pub fn decode_move(text: &str) -> Result<Move> {
    let (body, capture) = match text.split_once(CAPTURE_SEPARATOR) {
        Some((body, capture)) => (body, Some(coordinate(text, capture)?)),
        None => (text, None),
    };

    let mv = match (body.split_once(SLIDE_SEPARATOR), capture) {
        (None, None) => Move::place(coordinate(text, body)?),
        (None, Some(capture)) => Move::place_capture(coordinate(text, body)?, capture),
        (Some((from, to)), None) => Move::slide(coordinate(text, from)?, coordinate(text, to)?),
        (Some((from, to)), Some(capture)) => {
            Move::slide_capture(coordinate(text, from)?, coordinate(text, to)?, capture)
        }
    };

    Ok(mv)
}

fn coordinate(input: &str, token: &str) -> Result<Point> {
    if token.is_empty() {
        return Err(RulesError::move_string(input, "missing coordinate"));
    }
    Point::from_coordinate(token)
        .ok_or_else(|| RulesError::move_string(input, format!("unknown coordinate {token:?}")))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { to } => write!(f, "{to}"),
            Move::PlaceCapture { to, capture } => write!(f, "{to}{CAPTURE_SEPARATOR}{capture}"),
            Move::Slide { from, to } => write!(f, "{from}{SLIDE_SEPARATOR}{to}"),
            Move::SlideCapture { from, to, capture } => {
                write!(f, "{from}{SLIDE_SEPARATOR}{to}{CAPTURE_SEPARATOR}{capture}")
            }
        }
    }
}

impl FromStr for Move {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self> {
        decode_move(s)
    }
}
