//! Game-over status.
//!
//! `GameOver` only moves forward: once it leaves `None` it stays fixed
//! until the game is reset.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of the game so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOver {
    /// The game continues.
    #[default]
    None,
    WinnerWhite,
    WinnerBlack,
    Draw,
}

impl GameOver {
    /// A win for `player`.
    #[must_use]
    pub const fn win_for(player: Player) -> Self {
        match player {
            Player::White => GameOver::WinnerWhite,
            Player::Black => GameOver::WinnerBlack,
        }
    }

    /// Has the game ended?
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOver::None)
    }

    /// The winner, if the game ended with one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameOver::WinnerWhite => Some(Player::White),
            GameOver::WinnerBlack => Some(Player::Black),
            GameOver::None | GameOver::Draw => None,
        }
    }

    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOver::None => write!(f, "in progress"),
            GameOver::WinnerWhite => write!(f, "White wins"),
            GameOver::WinnerBlack => write!(f, "Black wins"),
            GameOver::Draw => write!(f, "draw"),
        }
    }
}
