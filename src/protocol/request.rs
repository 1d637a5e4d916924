//! Commands sent to an external move-search engine.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Player, Position};
use crate::rules::GameState;

/// Optional limits for one search.
///
/// Times are in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    pub white_time: Option<u32>,
    pub black_time: Option<u32>,
    pub max_depth: Option<u32>,
    pub max_time: Option<u32>,
}

impl SearchBudget {
    /// No limits at all.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(mut self, player: Player, millis: u32) -> Self {
        match player {
            Player::White => self.white_time = Some(millis),
            Player::Black => self.black_time = Some(millis),
        }
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn with_max_time(mut self, millis: u32) -> Self {
        self.max_time = Some(millis);
        self
    }
}

/// Everything the engine needs to pick a move: where the game started,
/// what was played since and how long it may think.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Starting position, or `None` for the empty board.
    pub position: Option<Position>,
    /// Moves played since the starting position.
    pub moves: Vec<Move>,
    pub budget: SearchBudget,
}

impl SearchRequest {
    /// Request for the game in progress.
    ///
    /// The standard start is sent as `startpos`; anything else is sent as a
    /// position string.
    #[must_use]
    pub fn from_game(game: &GameState, budget: SearchBudget) -> Self {
        let setup = *game.setup_position();
        let is_standard = setup == Position::start() && setup.plies == 0;

        Self {
            position: (!is_standard).then_some(setup),
            moves: game.moves().iter().copied().collect(),
            budget,
        }
    }

    /// `position startpos|pos <position> [moves <m1> <m2> ...]`
    #[must_use]
    pub fn position_command(&self) -> String {
        let mut command = match &self.position {
            Some(position) => format!("position pos {position}"),
            None => "position startpos".to_string(),
        };

        if !self.moves.is_empty() {
            command.push_str(" moves");
            for mv in &self.moves {
                command.push(' ');
                command.push_str(&mv.to_string());
            }
        }

        command
    }

    /// `go [wtime N] [btime N] [maxdepth N] [movetime N]`
    #[must_use]
    pub fn go_command(&self) -> String {
        let budget = &self.budget;
        let limits = [
            ("wtime", budget.white_time),
            ("btime", budget.black_time),
            ("maxdepth", budget.max_depth),
            ("movetime", budget.max_time),
        ];

        let mut command = "go".to_string();
        for (name, value) in limits {
            if let Some(value) = value {
                command.push_str(&format!(" {name} {value}"));
            }
        }
        command
    }

    /// Both command lines, in the order they are sent.
    #[must_use]
    pub fn commands(&self) -> [String; 2] {
        [self.position_command(), self.go_command()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Variant};

    #[test]
    fn test_startpos_without_moves() {
        let game = GameState::new(Variant::Nine);
        let request = SearchRequest::from_game(&game, SearchBudget::unlimited());
        assert_eq!(request.position, None);
        assert_eq!(request.position_command(), "position startpos");
        assert_eq!(request.go_command(), "go");
    }

    #[test]
    fn test_moves_are_listed() {
        let mut game = GameState::new(Variant::Nine);
        game.apply_move(Move::place(Point::new(0))).unwrap();
        game.apply_move(Move::place(Point::new(23))).unwrap();

        let request = SearchRequest::from_game(&game, SearchBudget::unlimited());
        assert_eq!(request.position_command(), "position startpos moves a7 g1");
    }

    #[test]
    fn test_budget_fields() {
        let budget = SearchBudget::unlimited()
            .with_clock(Player::White, 60_000)
            .with_clock(Player::Black, 55_000)
            .with_max_depth(8)
            .with_max_time(1_500);
        let request = SearchRequest {
            budget,
            ..SearchRequest::default()
        };
        assert_eq!(
            request.go_command(),
            "go wtime 60000 btime 55000 maxdepth 8 movetime 1500"
        );

        let request = SearchRequest {
            budget: SearchBudget::unlimited().with_max_depth(4),
            ..SearchRequest::default()
        };
        assert_eq!(request.go_command(), "go maxdepth 4");
    }
}
