//! The 24-point board.
//!
//! A `Board` is a plain `Copy` array of node states. Move generation works
//! on owned copies, so provisional placements never leak into the caller's
//! board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::{Node, Player};
use super::point::{Point, POINT_COUNT};

/// Occupancy of all 24 points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Node; POINT_COUNT]);

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self([Node::Empty; POINT_COUNT])
    }

    /// Build a board from lists of white and black points.
    ///
    /// Later entries overwrite earlier ones; black is applied after white.
    #[must_use]
    pub fn from_points(white: &[Point], black: &[Point]) -> Self {
        let mut board = Self::new();
        for &point in white {
            board.set(point, Node::White);
        }
        for &point in black {
            board.set(point, Node::Black);
        }
        board
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Node {
        self.0[point.index()]
    }

    pub fn set(&mut self, point: Point, node: Node) {
        self.0[point.index()] = node;
    }

    /// Put a piece of `player` on an empty point.
    pub fn place(&mut self, point: Point, player: Player) {
        debug_assert!(self.get(point).is_empty(), "placing on occupied {point}");
        self.set(point, player.node());
    }

    /// Clear a point, returning what was there.
    pub fn remove(&mut self, point: Point) -> Node {
        std::mem::take(&mut self.0[point.index()])
    }

    /// Move the piece on `from` to the empty point `to`.
    pub fn slide(&mut self, from: Point, to: Point) {
        debug_assert!(!self.get(from).is_empty(), "sliding from empty {from}");
        debug_assert!(self.get(to).is_empty(), "sliding onto occupied {to}");
        self.0.swap(from.index(), to.index());
    }

    /// Is `point` held by `player`?
    #[must_use]
    pub fn is_owned_by(&self, point: Point, player: Player) -> bool {
        self.get(point) == player.node()
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> u32 {
        let node = player.node();
        self.0.iter().filter(|&&n| n == node).count() as u32
    }

    /// Number of empty points.
    #[must_use]
    pub fn count_empty(&self) -> u32 {
        self.0.iter().filter(|n| n.is_empty()).count() as u32
    }

    /// Points held by `player`, ascending.
    pub fn points_of(&self, player: Player) -> impl Iterator<Item = Point> + '_ {
        let node = player.node();
        Point::all().filter(move |&p| self.get(p) == node)
    }

    /// Empty points, ascending.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(move |&p| self.get(p).is_empty())
    }

    /// Raw node array.
    #[must_use]
    pub fn nodes(&self) -> &[Node; POINT_COUNT] {
        &self.0
    }
}

impl Index<Point> for Board {
    type Output = Node;

    fn index(&self, point: Point) -> &Node {
        &self.0[point.index()]
    }
}

impl From<[Node; POINT_COUNT]> for Board {
    fn from(nodes: [Node; POINT_COUNT]) -> Self {
        Self(nodes)
    }
}
