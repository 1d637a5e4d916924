//! Position text codec.
//!
//! Grammar: `<player>:<color><pieces>:<color><pieces>:<turn>`, for example
//! `w:wa7,d7,g7:ba4,b4,c4:4`. Both color sections must be present with
//! different letters, in either order. The turn number starts at 1 and
//! advances after Black moves.
//!
//! Encoding is canonical: White's section first, coordinates ascending by
//! point index. Decoding then encoding an arbitrarily ordered string is
//! therefore not byte-identical, but a second round trip changes nothing.

use std::fmt;
use std::str::FromStr;

use crate::core::{Board, Node, Player, Point, Position};
use crate::error::{Result, RulesError};

const FIELD_SEPARATOR: char = ':';
const PIECE_SEPARATOR: char = ',';

/// Canonical text form of a position.
#[must_use]
pub fn encode_position(position: &Position) -> String {
    position.to_string()
}

/// Parse a position string.
///
/// ## Example
///
/// ```
/// use muhle_rules::core::{Player, Point};
/// use muhle_rules::notation::decode_position;
///
/// let position = decode_position("w:wa7,d7,g7:ba4,b4,c4:4").unwrap();
/// assert_eq!(position.player, Player::White);
/// assert_eq!(position.plies, 6);
/// assert_eq!(position.board.count(Player::Black), 3);
/// assert!(position.board.is_owned_by(Point::new(9), Player::Black));
/// ```
pub fn decode_position(text: &str) -> Result<Position> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    let [player, first, second, turn] = fields.as_slice() else {
        return Err(RulesError::position(
            text,
            format!("expected 4 ':'-separated fields, found {}", fields.len()),
        ));
    };

    let player = single_letter(player)
        .and_then(Player::from_letter)
        .ok_or_else(|| RulesError::position(text, format!("unknown player {player:?}")))?;

    let mut board = Board::new();
    let first_color = decode_section(text, first, &mut board)?;
    let second_color = decode_section(text, second, &mut board)?;
    if first_color == second_color {
        return Err(RulesError::position(
            text,
            format!("color {} given twice", first_color.letter()),
        ));
    }

    let turn = decode_turn(text, turn)?;
    let plies = (turn - 1)
        .checked_mul(2)
        .and_then(|plies| plies.checked_add(u32::from(player == Player::Black)))
        .ok_or_else(|| RulesError::position(text, "turn number too large"))?;

    Ok(Position::new(board, player, plies))
}

fn single_letter(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

/// Fill `board` with one color section and return its color.
fn decode_section(input: &str, section: &str, board: &mut Board) -> Result<Player> {
    let mut chars = section.chars();
    let color = chars
        .next()
        .and_then(Player::from_letter)
        .ok_or_else(|| RulesError::position(input, format!("bad color section {section:?}")))?;

    let pieces = chars.as_str();
    if pieces.is_empty() {
        return Ok(color);
    }

    for token in pieces.split(PIECE_SEPARATOR) {
        let point = Point::from_coordinate(token)
            .ok_or_else(|| RulesError::position(input, format!("unknown coordinate {token:?}")))?;
        if !board[point].is_empty() {
            return Err(RulesError::position(input, format!("point {point} given twice")));
        }
        board.place(point, color);
    }

    Ok(color)
}

fn decode_turn(input: &str, turn: &str) -> Result<u32> {
    if turn.is_empty() || !turn.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RulesError::position(input, format!("bad turn number {turn:?}")));
    }
    match turn.parse::<u32>() {
        Ok(0) => Err(RulesError::position(input, "turn number must be at least 1")),
        Ok(turn) => Ok(turn),
        Err(_) => Err(RulesError::position(input, "turn number too large")),
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, board: &Board, player: Player) -> fmt::Result {
    write!(f, "{}", player.letter())?;
    for (i, point) in board.points_of(player).enumerate() {
        if i > 0 {
            write!(f, "{PIECE_SEPARATOR}")?;
        }
        write!(f, "{point}")?;
    }
    Ok(())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}", self.player.letter())?;
        write_section(f, &self.board, Player::White)?;
        write!(f, "{FIELD_SEPARATOR}")?;
        write_section(f, &self.board, Player::Black)?;
        write!(f, "{FIELD_SEPARATOR}{}", self.turn())
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self> {
        decode_position(s)
    }
}

impl fmt::Display for Board {
    /// ASCII diagram of the board, rank 7 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ROWS: [&[u8]; 7] = [
            &[0, 1, 2],
            &[3, 4, 5],
            &[6, 7, 8],
            &[9, 10, 11, 12, 13, 14],
            &[15, 16, 17],
            &[18, 19, 20],
            &[21, 22, 23],
        ];

        for (rank, row) in (1..=7).rev().zip(ROWS) {
            let mut line = [' '; 7];
            for &index in row {
                let point = Point::new(index);
                let file = point.coordinate().as_bytes()[0] - b'a';
                line[usize::from(file)] = match self[point] {
                    Node::Empty => '.',
                    Node::White => 'W',
                    Node::Black => 'B',
                };
            }
            let line: String = line.iter().collect();
            writeln!(f, "{rank} {}", line.trim_end())?;
        }
        write!(f, "  abcdefg")
    }
}
