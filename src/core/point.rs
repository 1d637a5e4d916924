//! Board points and the coordinate table.
//!
//! The board has 24 points indexed in reading order, top rank first:
//!
//! ```text
//! 7  0-----------1-----------2
//! 6  |   3-------4-------5   |
//! 5  |   |   6---7---8   |   |
//! 4  9--10--11       12--13--14
//! 3  |   |  15--16--17   |   |
//! 2  |  18------19------20   |
//! 1  21---------22----------23
//!    a   b   c   d   e   f   g
//! ```
//!
//! Each point has a two-character coordinate (`a7` .. `g1`) used by the
//! position and move notations.
//!
//! ```
//! use muhle_rules::core::Point;
//!
//! let point: Point = "d7".parse().unwrap();
//! assert_eq!(point.index(), 1);
//! assert_eq!(point.to_string(), "d7");
//! ```

use serde::{Deserialize, Serialize};

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// Coordinates of every point, by index.
pub const COORDINATES: [&str; POINT_COUNT] = [
    "a7", "d7", "g7",
    "b6", "d6", "f6",
    "c5", "d5", "e5",
    "a4", "b4", "c4", "e4", "f4", "g4",
    "c3", "d3", "e3",
    "b2", "d2", "f2",
    "a1", "d1", "g1",
];

/// A point on the board, always in `0..24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Point(u8);

impl Point {
    /// Create a point from its index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < POINT_COUNT, "point index out of range");
        Self(index)
    }

    /// Create a point from its index, or `None` if out of range.
    #[must_use]
    pub const fn try_new(index: u8) -> Option<Self> {
        if (index as usize) < POINT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The point's two-character coordinate.
    #[must_use]
    pub const fn coordinate(self) -> &'static str {
        COORDINATES[self.0 as usize]
    }

    /// Look up a point by coordinate.
    #[must_use]
    pub fn from_coordinate(coordinate: &str) -> Option<Self> {
        COORDINATES
            .iter()
            .position(|&c| c == coordinate)
            .map(|index| Self(index as u8))
    }

    /// Iterate over all points in ascending index order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..POINT_COUNT as u8).map(Point)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.coordinate())
    }
}

impl std::str::FromStr for Point {
    type Err = UnknownCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_coordinate(s).ok_or_else(|| UnknownCoordinate(s.to_string()))
    }
}

impl TryFrom<u8> for Point {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_new(index).ok_or_else(|| format!("point index {index} out of range"))
    }
}

impl From<Point> for u8 {
    fn from(point: Point) -> Self {
        point.0
    }
}

/// A coordinate string that names no board point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown coordinate {0:?}")]
pub struct UnknownCoordinate(pub String);
