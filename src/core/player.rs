//! Players and point occupancy.
//!
//! ## Player
//!
//! The two sides of a Mühle game. White always moves first from the
//! standard starting position.
//!
//! ## Node
//!
//! The state of a single board point: empty or holding a piece of one side.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The node value a piece of this player occupies.
    #[must_use]
    pub const fn node(self) -> Node {
        match self {
            Player::White => Node::White,
            Player::Black => Node::Black,
        }
    }

    /// Single-letter notation (`w` or `b`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    /// Parse a single-letter notation.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'w' => Some(Player::White),
            'b' => Some(Player::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Occupancy of a board point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    #[default]
    Empty,
    White,
    Black,
}

impl Node {
    /// The owner of the piece on this node, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Node::Empty => None,
            Node::White => Some(Player::White),
            Node::Black => Some(Player::Black),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Node::Empty)
    }
}

impl From<Player> for Node {
    fn from(player: Player) -> Self {
        player.node()
    }
}
