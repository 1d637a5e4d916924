//! Replies from an external move-search engine and their cross-check
//! against the rules engine.

use std::fmt;

use log::error;

use crate::core::Move;
use crate::error::{Result, RulesError};
use crate::rules::GameState;

/// Literal the engine sends instead of a move when it sees the game as over.
pub const NO_MOVE: &str = "none";

const BEST_MOVE: &str = "bestmove";

/// A `bestmove` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineReply {
    BestMove(Move),
    /// The engine found no legal move.
    NoMove,
}

impl EngineReply {
    /// Parse `bestmove <move>` or `bestmove none`.
    ///
    /// Tokens may be separated by any whitespace. A move token that is not
    /// valid move text fails with `InvalidMoveString`.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let (Some(BEST_MOVE), Some(argument), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(RulesError::InvalidEngineReply {
                input: line.to_string(),
            });
        };

        if argument == NO_MOVE {
            Ok(EngineReply::NoMove)
        } else {
            Ok(EngineReply::BestMove(argument.parse()?))
        }
    }
}

impl fmt::Display for EngineReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineReply::BestMove(mv) => write!(f, "{BEST_MOVE} {mv}"),
            EngineReply::NoMove => write!(f, "{BEST_MOVE} {NO_MOVE}"),
        }
    }
}

impl GameState {
    /// Check an engine reply against the rules.
    ///
    /// Returns the move to apply, or `None` when the engine and the rules
    /// engine agree that the game is over. A contradiction about game-over
    /// status is an `EngineDisagreement`; a move the rules do not allow is an
    /// `IllegalMove`.
    pub fn confirm_engine_reply(&self, reply: EngineReply) -> Result<Option<Move>> {
        match (reply, self.game_over().is_over()) {
            (EngineReply::NoMove, true) => Ok(None),
            (EngineReply::NoMove, false) => Err(disagreement(format!(
                "engine has no move but the game is in progress with {} legal moves",
                self.legal_moves().len()
            ))),
            (EngineReply::BestMove(mv), true) => Err(disagreement(format!(
                "engine played {mv} but the game is over ({})",
                self.game_over()
            ))),
            (EngineReply::BestMove(mv), false) if self.is_legal(&mv) => Ok(Some(mv)),
            (EngineReply::BestMove(mv), false) => Err(RulesError::IllegalMove {
                mv,
                reason: format!("engine move not legal for {}", self.player()),
            }),
        }
    }
}

fn disagreement(reason: String) -> RulesError {
    error!("{reason}");
    RulesError::EngineDisagreement { reason }
}
