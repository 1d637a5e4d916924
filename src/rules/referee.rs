//! Referee: a `GameState` that reports every committed move.
//!
//! Drivers (GUIs, engine matches, loggers) implement `MoveListener` to hear
//! about moves as they are accepted. Any `FnMut(&MoveCommitted)` closure is a
//! listener.
//!
//! ## Example
//!
//! ```
//! use muhle_rules::core::Variant;
//! use muhle_rules::rules::{MoveCommitted, Referee};
//!
//! let mut seen = Vec::new();
//! let mut referee = Referee::new(Variant::Nine, |event: &MoveCommitted| seen.push(event.mv));
//! referee.apply_str("d5").unwrap();
//! drop(referee);
//!
//! assert_eq!(seen.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::engine::GameState;
use super::outcome::GameOver;
use crate::core::{Move, Player, Position, RulesConfig, Variant};
use crate::error::Result;

/// A move the rules engine accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommitted {
    pub mv: Move,
    /// Side that played the move.
    pub mover: Player,
    /// Ply count after the move.
    pub ply: u32,
    /// Game status after the move.
    pub game_over: GameOver,
}

/// Receives committed moves.
pub trait MoveListener {
    fn on_move(&mut self, event: &MoveCommitted);
}

impl<F: FnMut(&MoveCommitted)> MoveListener for F {
    fn on_move(&mut self, event: &MoveCommitted) {
        self(event)
    }
}

/// Listener that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoListener;

impl MoveListener for NoListener {
    fn on_move(&mut self, _event: &MoveCommitted) {}
}

/// Game state plus a listener notified after each accepted move.
pub struct Referee<L: MoveListener = NoListener> {
    state: GameState,
    listener: L,
}

impl<L: MoveListener> Referee<L> {
    pub fn new(variant: Variant, listener: L) -> Self {
        Self {
            state: GameState::new(variant),
            listener,
        }
    }

    /// Wrap an existing game.
    pub fn with_state(state: GameState, listener: L) -> Self {
        Self { state, listener }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Apply a move and notify the listener if it was accepted.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveCommitted> {
        let mover = self.state.player();
        let mv = self.state.apply_move(mv)?;

        let event = MoveCommitted {
            mv,
            mover,
            ply: self.state.position().plies,
            game_over: self.state.game_over(),
        };
        self.listener.on_move(&event);
        Ok(event)
    }

    /// Decode a move string and apply it.
    pub fn apply_str(&mut self, text: &str) -> Result<MoveCommitted> {
        let mv: Move = text.parse()?;
        self.apply_move(mv)
    }

    pub fn timeout(&mut self, player: Player) -> GameOver {
        self.state.timeout(player)
    }

    pub fn reset(&mut self, config: RulesConfig, start: Option<Position>) -> Result<()> {
        self.state.reset_with_config(config, start)
    }

    /// Give back the game and the listener.
    pub fn into_inner(self) -> (GameState, L) {
        (self.state, self.listener)
    }
}

impl Referee<NoListener> {
    /// A referee nobody listens to.
    #[must_use]
    pub fn silent(variant: Variant) -> Self {
        Self::new(variant, NoListener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::error::RulesError;

    struct Recorder(Vec<MoveCommitted>);

    impl MoveListener for Recorder {
        fn on_move(&mut self, event: &MoveCommitted) {
            self.0.push(*event);
        }
    }

    #[test]
    fn test_listener_sees_accepted_moves_only() {
        let mut referee = Referee::new(Variant::Nine, Recorder(Vec::new()));
        referee.apply_str("a7").unwrap();
        assert!(referee.apply_str("a7").is_err());
        referee.apply_str("g1").unwrap();

        let (state, recorder) = referee.into_inner();
        assert_eq!(state.position().plies, 2);
        assert_eq!(
            recorder.0,
            vec![
                MoveCommitted {
                    mv: Move::place(Point::new(0)),
                    mover: Player::White,
                    ply: 1,
                    game_over: GameOver::None,
                },
                MoveCommitted {
                    mv: Move::place(Point::new(23)),
                    mover: Player::Black,
                    ply: 2,
                    game_over: GameOver::None,
                },
            ]
        );
    }

    #[test]
    fn test_malformed_move_string() {
        let mut referee = Referee::silent(Variant::Nine);
        let err = referee.apply_str("z9").unwrap_err();
        assert!(matches!(err, RulesError::InvalidMoveString { .. }));
        assert_eq!(referee.state().position().plies, 0);
    }

    #[test]
    fn test_timeout_and_reset() {
        let mut referee = Referee::silent(Variant::Nine);
        assert_eq!(referee.timeout(Player::Black), GameOver::WinnerWhite);

        referee.reset(RulesConfig::new(Variant::Twelve), None).unwrap();
        assert_eq!(referee.state().variant(), Variant::Twelve);
        assert_eq!(referee.state().game_over(), GameOver::None);
    }
}
