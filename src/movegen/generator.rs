//! Legal move generation.
//!
//! Every candidate placement or slide is tried on an owned copy of the
//! board. If the moved-to point closes a mill for the mover, the candidate
//! fans out into one capturing move per capturable opponent piece;
//! otherwise it is emitted as a plain move.
//!
//! Output order is deterministic: destinations (placement) or sources then
//! destinations (slides) ascending, and capture targets ascending within a
//! candidate.

use log::trace;
use smallvec::SmallVec;

use super::mills::{capture_targets, is_mill};
use crate::core::{Board, Move, Player, Point, Position, Variant};
use crate::topology::Topology;

/// Phase of the game for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// New pieces are placed on empty points.
    Placement,
    /// Pieces slide along lines to adjacent empty points.
    Movement,
    /// A side down to three pieces may jump to any empty point.
    Flying,
}

/// Which phase `player` is in.
///
/// Placement lasts `placement_plies` plies. Afterwards a side with exactly
/// three pieces flies; any other count moves by adjacency.
#[must_use]
pub fn phase(board: &Board, player: Player, plies: u32, variant: Variant) -> Phase {
    if plies < variant.placement_plies() {
        Phase::Placement
    } else if board.count(player) == 3 {
        Phase::Flying
    } else {
        Phase::Movement
    }
}

/// All legal moves for `player`, in deterministic order.
///
/// Pure: `board` is never modified.
#[must_use]
pub fn generate_moves(board: &Board, player: Player, plies: u32, variant: Variant) -> Vec<Move> {
    let topology = variant.topology();
    let mut moves = Vec::new();

    let phase = phase(board, player, plies, variant);
    match phase {
        Phase::Placement => generate_placements(board, player, topology, &mut moves),
        Phase::Movement => generate_slides(board, player, topology, &mut moves),
        Phase::Flying => generate_flights(board, player, topology, &mut moves),
    }

    trace!("{player} at ply {plies}: {phase:?}, {} moves", moves.len());
    moves
}

/// Legal moves for the side to move in `position`.
#[must_use]
pub fn generate_for(position: &Position, variant: Variant) -> Vec<Move> {
    generate_moves(&position.board, position.player, position.plies, variant)
}

/// Empty neighbors of `point`, ascending.
#[must_use]
pub fn free_neighbors(board: &Board, point: Point, topology: &Topology) -> SmallVec<[Point; 4]> {
    topology
        .neighbors(point)
        .filter(|&n| board[n].is_empty())
        .collect()
}

fn generate_placements(board: &Board, player: Player, topology: &Topology, moves: &mut Vec<Move>) {
    for to in board.empty_points() {
        let mut after = *board;
        after.place(to, player);

        push_candidate(&after, player, to, topology, moves, Move::place(to), |capture| {
            Move::place_capture(to, capture)
        });
    }
}

fn generate_slides(board: &Board, player: Player, topology: &Topology, moves: &mut Vec<Move>) {
    for from in board.points_of(player) {
        for to in free_neighbors(board, from, topology) {
            push_slide(board, player, from, to, topology, moves);
        }
    }
}

fn generate_flights(board: &Board, player: Player, topology: &Topology, moves: &mut Vec<Move>) {
    for from in board.points_of(player) {
        for to in board.empty_points() {
            push_slide(board, player, from, to, topology, moves);
        }
    }
}

fn push_slide(
    board: &Board,
    player: Player,
    from: Point,
    to: Point,
    topology: &Topology,
    moves: &mut Vec<Move>,
) {
    let mut after = *board;
    after.slide(from, to);

    push_candidate(&after, player, to, topology, moves, Move::slide(from, to), |capture| {
        Move::slide_capture(from, to, capture)
    });
}

/// Emit `plain`, or one capturing move per target if `to` closed a mill.
fn push_candidate(
    after: &Board,
    player: Player,
    to: Point,
    topology: &Topology,
    moves: &mut Vec<Move>,
    plain: Move,
    capturing: impl Fn(Point) -> Move,
) {
    if is_mill(after, player, to, topology) {
        moves.extend(
            capture_targets(after, player.opponent(), topology)
                .into_iter()
                .map(capturing),
        );
    } else {
        moves.push(plain);
    }
}
