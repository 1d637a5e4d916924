//! Positions: board, side to move and ply count.
//!
//! Two positions are equal when their boards and side to move match; the
//! ply count is ignored. Repetition detection uses a stricter comparison,
//! `repeats`, which additionally requires both positions to be past the
//! placement phase.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// A game position.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// Player to move.
    pub player: Player,

    /// Half-moves played since the start of the game.
    pub plies: u32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(board: Board, player: Player, plies: u32) -> Self {
        Self { board, player, plies }
    }

    /// The standard starting position: empty board, White to move.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(Board::new(), Player::White, 0)
    }

    /// Full-move number, starting at 1.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.plies / 2 + 1
    }

    /// Is the game still in the placement phase?
    #[must_use]
    pub const fn is_placement(&self, placement_plies: u32) -> bool {
        self.plies < placement_plies
    }

    /// Pieces `player` still places before the placement phase ends.
    #[must_use]
    pub fn placements_left(&self, player: Player, placement_plies: u32) -> u32 {
        let plies_left = placement_plies.saturating_sub(self.plies);
        if player == self.player {
            plies_left.div_ceil(2)
        } else {
            plies_left / 2
        }
    }

    /// Repetition equality.
    ///
    /// Same board and side to move, and both positions have at least
    /// `placement_plies` plies.
    #[must_use]
    pub fn repeats(&self, other: &Position, placement_plies: u32) -> bool {
        self == other && self.plies >= placement_plies && other.plies >= placement_plies
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.player == other.player
    }
}

impl Eq for Position {}
