//! The rules engine: game state, move application and game-over detection.
//!
//! `GameState` owns the current position, the cached legal moves and the
//! bookkeeping for the draw rules. Every accepted move runs the end-of-game
//! checks in a fixed order:
//!
//! 1. Material (capturing moves only, after the placement phase): a side
//!    left with fewer than three pieces loses.
//! 2. Blockade: a side with no legal move loses.
//! 3. Fifty-move rule (quiet moves only): too many plies without
//!    advancement draw the game.
//! 4. Repetition (quiet moves only): the same position occurring often
//!    enough draws the game.
//!
//! Placements and captures are advancements; they reset the quiet-ply
//! counter and the repetition history. Only non-capturing slides are quiet.

use im::Vector;
use log::{debug, info, warn};

use super::outcome::GameOver;
use crate::core::{Move, Player, Position, RulesConfig, Variant};
use crate::error::{Result, RulesError};
use crate::movegen;

/// Complete state of one game in progress.
///
/// Cloning is cheap: the repetition history and move log are persistent
/// vectors.
///
/// ## Example
///
/// ```
/// use muhle_rules::core::{Move, Player, Point, Variant};
/// use muhle_rules::rules::{GameOver, GameState};
///
/// let mut game = GameState::new(Variant::Nine);
/// game.apply_move(Move::place(Point::new(0))).unwrap();
///
/// assert_eq!(game.position().player, Player::Black);
/// assert_eq!(game.position().plies, 1);
/// assert_eq!(game.game_over(), GameOver::None);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: RulesConfig,
    position: Position,
    setup_position: Position,
    plies_without_advancement: u32,
    history: Vector<Position>,
    moves: Vector<Move>,
    legal_moves: Vec<Move>,
    game_over: GameOver,
}

impl GameState {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::fresh(RulesConfig::new(variant), Position::start())
    }

    /// A new game with explicit rules and an optional starting position.
    ///
    /// Fails if the draw thresholds are out of range, or if a side's pieces
    /// on the board plus those it still has to place exceed the variant's count.
    pub fn with_config(config: RulesConfig, start: Option<Position>) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| RulesError::InvalidConfig { reason })?;
        let start = start.unwrap_or_else(Position::start);
        validate_start(&config, &start)?;
        Ok(Self::fresh(config, start))
    }

    /// Rebuild a game by replaying `moves` from `start`.
    pub fn replay(
        config: RulesConfig,
        start: Option<Position>,
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self> {
        let mut state = Self::with_config(config, start)?;
        for mv in moves {
            state.apply_move(mv)?;
        }
        Ok(state)
    }

    fn fresh(config: RulesConfig, start: Position) -> Self {
        info!("new game: {}, starting at ply {}", config.variant, start.plies);

        let legal_moves = movegen::generate_for(&start, config.variant);
        Self {
            config,
            position: start,
            setup_position: start,
            plies_without_advancement: 0,
            history: Vector::new(),
            moves: Vector::new(),
            legal_moves,
            game_over: GameOver::None,
        }
    }

    /// Replace the whole game state, keeping the draw thresholds.
    pub fn reset(&mut self, variant: Variant, start: Option<Position>) -> Result<()> {
        let config = RulesConfig { variant, ..self.config };
        self.reset_with_config(config, start)
    }

    /// Replace the whole game state with new rules.
    pub fn reset_with_config(&mut self, config: RulesConfig, start: Option<Position>) -> Result<()> {
        *self = Self::with_config(config, start)?;
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Position the game started from.
    #[must_use]
    pub fn setup_position(&self) -> &Position {
        &self.setup_position
    }

    /// Player to move.
    #[must_use]
    pub fn player(&self) -> Player {
        self.position.player
    }

    /// Legal moves for the player to move, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[must_use]
    pub fn game_over(&self) -> GameOver {
        self.game_over
    }

    /// Consecutive quiet plies since the last advancement.
    #[must_use]
    pub fn plies_without_advancement(&self) -> u32 {
        self.plies_without_advancement
    }

    /// Positions since the last advancement, oldest first, current last.
    #[must_use]
    pub fn history(&self) -> &Vector<Position> {
        &self.history
    }

    /// Moves played since the setup position.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    // === Transitions ===

    /// Apply a legal move and run the end-of-game checks.
    ///
    /// The move must appear in `legal_moves()`; anything else is rejected
    /// without touching the state.
    pub fn apply_move(&mut self, mv: Move) -> Result<Move> {
        if self.game_over.is_over() {
            warn!("rejected {mv}: game already over ({})", self.game_over);
            return Err(RulesError::GameAlreadyOver {
                outcome: self.game_over,
            });
        }

        if !self.is_legal(&mv) {
            warn!("rejected {mv}: not legal for {} at ply {}", self.player(), self.position.plies);
            return Err(RulesError::IllegalMove {
                mv,
                reason: format!("not in the legal move list of {}", self.player()),
            });
        }

        let mover = self.position.player;
        mv.apply(&mut self.position.board, mover);
        self.position.player = mover.opponent();
        self.position.plies += 1;
        self.legal_moves = movegen::generate_for(&self.position, self.config.variant);
        self.moves.push_back(mv);

        debug!("ply {}: {mover} played {mv}", self.position.plies);

        let quiet = !mv.is_capture() && !mv.is_placement();

        if mv.is_capture() {
            self.check_material();
        }
        self.check_blockade();

        if quiet {
            self.plies_without_advancement += 1;
            self.check_fifty_move_rule();
        } else {
            self.plies_without_advancement = 0;
            self.history.clear();
        }
        self.history.push_back(self.position);

        if quiet {
            self.check_repetition();
        }

        Ok(mv)
    }

    /// A side ran out of time: the other side wins.
    ///
    /// Ignored if the game is already decided.
    pub fn timeout(&mut self, player: Player) -> GameOver {
        if self.game_over.is_over() {
            warn!("ignoring timeout of {player}: game already over ({})", self.game_over);
        } else {
            self.decide(GameOver::win_for(player.opponent()), "timeout");
        }
        self.game_over
    }

    // === End-of-game checks ===

    fn check_material(&mut self) {
        let player = self.position.player;
        let past_placement = !self.position.is_placement(self.config.placement_plies());

        if past_placement && self.position.board.count(player) < 3 {
            self.decide(GameOver::win_for(player.opponent()), "material");
        }
    }

    fn check_blockade(&mut self) {
        if self.legal_moves.is_empty() {
            self.decide(GameOver::win_for(self.position.player.opponent()), "blockade");
        }
    }

    fn check_fifty_move_rule(&mut self) {
        if self.plies_without_advancement >= self.config.fifty_move_plies {
            self.decide(GameOver::Draw, "fifty-move rule");
        }
    }

    fn check_repetition(&mut self) {
        let placement_plies = self.config.placement_plies();
        let occurrences = self
            .history
            .iter()
            .filter(|earlier| earlier.repeats(&self.position, placement_plies))
            .count();

        if occurrences >= self.config.repetition_count as usize {
            self.decide(GameOver::Draw, "repetition");
        }
    }

    /// Record the result unless one is already set.
    fn decide(&mut self, outcome: GameOver, rule: &str) {
        if self.game_over.is_over() {
            return;
        }
        info!("game over at ply {}: {outcome} by {rule}", self.position.plies);
        self.game_over = outcome;
    }
}

/// Every side's pieces on the board plus those it still places must fit the
/// variant's allowance.
fn validate_start(config: &RulesConfig, start: &Position) -> Result<()> {
    for player in Player::ALL {
        let on_board = start.board.count(player);
        let to_place = start.placements_left(player, config.placement_plies());
        if on_board + to_place > config.pieces_per_side() {
            return Err(RulesError::InvalidStartingPosition {
                reason: format!(
                    "{player} has {on_board} pieces and {to_place} to place, {} allows {}",
                    config.variant,
                    config.pieces_per_side()
                ),
            });
        }
    }
    Ok(())
}
