//! Random playouts.
//!
//! Plays uniformly random legal moves until the game ends or a ply cap is
//! reached. Seeded through `GameRng`, so a seed always reproduces the same
//! game. Used for property tests and benchmarks.
//!
//! ## Example
//!
//! ```
//! use muhle_rules::core::RulesConfig;
//! use muhle_rules::playout::random_game;
//!
//! let first = random_game(RulesConfig::default(), None, 7, 400).unwrap();
//! let second = random_game(RulesConfig::default(), None, 7, 400).unwrap();
//! assert_eq!(first, second);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, Position, RulesConfig};
use crate::error::Result;
use crate::rules::{GameOver, GameState};

/// What happened in one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// `GameOver::None` if the ply cap was hit first.
    pub outcome: GameOver,
    /// Plies played.
    pub plies: u32,
}

/// Play random legal moves on `game` for at most `max_plies` plies.
///
/// Returns the moves played; the game is left in its final state.
pub fn play_out(game: &mut GameState, rng: &mut GameRng, max_plies: u32) -> Result<Vec<Move>> {
    let mut played = Vec::new();

    while !game.game_over().is_over() && (played.len() as u32) < max_plies {
        let Some(&mv) = rng.choose(game.legal_moves()) else {
            break;
        };
        played.push(game.apply_move(mv)?);
    }

    Ok(played)
}

/// One random game from `start` (or the empty board).
pub fn random_game(
    config: RulesConfig,
    start: Option<Position>,
    seed: u64,
    max_plies: u32,
) -> Result<PlayoutRecord> {
    let mut game = GameState::with_config(config, start)?;
    let mut rng = GameRng::new(seed);
    let moves = play_out(&mut game, &mut rng, max_plies)?;

    Ok(PlayoutRecord {
        plies: moves.len() as u32,
        moves,
        outcome: game.game_over(),
    })
}

/// `count` independent random games from the empty board, each on its own
/// stream forked from `seed`.
pub fn random_games(config: RulesConfig, seed: u64, count: usize, max_plies: u32) -> Result<Vec<PlayoutRecord>> {
    let mut master = GameRng::new(seed);
    (0..count)
        .map(|_| random_game(config, None, master.fork().seed(), max_plies))
        .collect()
}
