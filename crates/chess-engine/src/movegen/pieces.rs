//! Per-piece pseudo-legal destination generators.
//!
//! Each generator appends moves for a single piece to a [`MoveList`]. The
//! offset and ray tables below fix the order destinations come out in, which
//! in turn fixes which solution a search reports first.

use super::MoveList;
use crate::Board;
use chess_core::{Move, Piece, PieceKind, Side, Square};

/// King steps as (file, rank) deltas: diagonals first, then orthogonals.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Knight jumps as (file, rank) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Diagonal ray directions.
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions.
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Appends the pseudo-legal moves of `piece` standing on `from`.
///
/// Check is ignored. Destinations are never off the board and never hold a
/// piece of `piece.side`.
pub(super) fn generate_piece_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    match piece.kind {
        PieceKind::King => generate_steps(board, from, piece.side, &KING_OFFSETS, moves),
        PieceKind::Knight => generate_steps(board, from, piece.side, &KNIGHT_OFFSETS, moves),
        PieceKind::Bishop => generate_rays(board, from, piece.side, &BISHOP_RAYS, moves),
        PieceKind::Rook => generate_rays(board, from, piece.side, &ROOK_RAYS, moves),
        PieceKind::Queen => {
            generate_rays(board, from, piece.side, &BISHOP_RAYS, moves);
            generate_rays(board, from, piece.side, &ROOK_RAYS, moves);
        }
        PieceKind::Pawn => generate_pawn(board, from, piece.side, moves),
    }
}

/// Returns true if `side` may move onto `to`: empty or held by the opponent.
#[inline]
fn is_available(board: &Board, to: Square, side: Side) -> bool {
    board.piece_at(to).map_or(true, |occupant| occupant.side != side)
}

/// Single-step pieces (king, knight).
fn generate_steps(
    board: &Board,
    from: Square,
    side: Side,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if is_available(board, to, side) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// Sliding pieces. A ray runs until the board edge or the first occupied
/// square, which is included only when it holds an opponent piece.
fn generate_rays(
    board: &Board,
    from: Square,
    side: Side,
    rays: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in rays {
        let mut current = from;
        while let Some(to) = current.offset(file_delta, rank_delta) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant.side != side {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Pawns: push, double push from the home rank, then captures towards the
/// a-file and the h-file. A pawn on the first or last rank has no moves.
fn generate_pawn(board: &Board, from: Square, side: Side, moves: &mut MoveList) {
    if from.rank().is_edge() {
        return;
    }

    let direction = side.pawn_direction();

    if let Some(one) = from.offset(0, direction) {
        if board.piece_at(one).is_none() {
            moves.push(Move::new(from, one));

            if from.rank() == side.pawn_home_rank() {
                if let Some(two) = one.offset(0, direction) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, direction) {
            if board
                .piece_at(to)
                .is_some_and(|occupant| occupant.side != side)
            {
                moves.push(Move::new(from, to));
            }
        }
    }
}
