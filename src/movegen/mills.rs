//! Mill detection and capture eligibility.

use smallvec::SmallVec;

use crate::core::{Board, Player, Point};
use crate::topology::Topology;

/// Does `point` belong to a mill of `player`?
///
/// True when `player` holds the point and both points of at least one of
/// its mill lines.
#[must_use]
pub fn is_mill(board: &Board, player: Player, point: Point, topology: &Topology) -> bool {
    board.is_owned_by(point, player)
        && topology
            .mill_lines(point)
            .any(|[a, b]| board.is_owned_by(a, player) && board.is_owned_by(b, player))
}

/// Is every piece of `player` part of some mill?
///
/// Vacuously true when `player` has no pieces.
#[must_use]
pub fn all_pieces_in_mills(board: &Board, player: Player, topology: &Topology) -> bool {
    board
        .points_of(player)
        .all(|point| is_mill(board, player, point, topology))
}

/// Pieces of `victim` that may be captured, ascending.
///
/// Pieces inside a mill are protected, unless every piece is in a mill, in
/// which case all of them are capturable.
#[must_use]
pub fn capture_targets(board: &Board, victim: Player, topology: &Topology) -> SmallVec<[Point; 12]> {
    let unprotected: SmallVec<[Point; 12]> = board
        .points_of(victim)
        .filter(|&point| !is_mill(board, victim, point, topology))
        .collect();

    if unprotected.is_empty() {
        board.points_of(victim).collect()
    } else {
        unprotected
    }
}
