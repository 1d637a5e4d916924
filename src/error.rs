//! Error types.
//!
//! Every failure is a caller-side logic error: the engine is deterministic
//! and has nothing to retry.

use crate::core::Move;
use crate::rules::GameOver;

/// Errors raised by the rules engine, codecs and protocol layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The move is not in the current legal move list.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: String },

    /// A move was offered after the game ended.
    #[error("game is already over ({outcome})")]
    GameAlreadyOver { outcome: GameOver },

    /// Position text does not follow the position grammar.
    #[error("invalid position string {input:?}: {reason}")]
    InvalidPositionString { input: String, reason: String },

    /// Move text does not follow the move grammar.
    #[error("invalid move string {input:?}: {reason}")]
    InvalidMoveString { input: String, reason: String },

    /// Draw thresholds outside their allowed range.
    #[error("invalid rules config: {reason}")]
    InvalidConfig { reason: String },

    /// A starting position the variant cannot reach.
    #[error("invalid starting position: {reason}")]
    InvalidStartingPosition { reason: String },

    /// An engine reply line that is not a `bestmove` reply.
    #[error("invalid engine reply {input:?}")]
    InvalidEngineReply { input: String },

    /// The external engine and the rules engine disagree about game over.
    #[error("engine disagrees with rules: {reason}")]
    EngineDisagreement { reason: String },
}

impl RulesError {
    pub(crate) fn position(input: &str, reason: impl Into<String>) -> Self {
        RulesError::InvalidPositionString {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn move_string(input: &str, reason: impl Into<String>) -> Self {
        RulesError::InvalidMoveString {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for rules operations.
pub type Result<T> = std::result::Result<T, RulesError>;
