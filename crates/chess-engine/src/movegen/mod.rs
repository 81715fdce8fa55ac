//! Move generation and the rules built on it.
//!
//! Generation is two-stage. The per-piece generators in [`pieces`] produce
//! pseudo-legal moves that ignore check; [`legal_moves`] then plays each
//! candidate with [`make_move`] and drops those that leave the mover's king
//! attacked.

mod pieces;
pub mod perft;

use crate::Board;
use chess_core::{Move, Side, Square};
use thiserror::Error;

/// Violations of the rules the engine relies on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("{0} has no king on the board")]
    MissingKing(Side),

    #[error("illegal move {0}: no piece on the origin square")]
    EmptyOrigin(Move),

    #[error("illegal move {0}: {1} is to move")]
    NotSideToMove(Move, Side),

    #[error("illegal move {0}: destination holds a piece of the mover")]
    OwnPieceCapture(Move),
}

/// A list of moves in generation order.
///
/// Diagrams are not required to be reachable from the starting position, so
/// the number of moves has no useful fixed bound; the list grows as needed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Initial capacity, enough for any position reachable in a game.
    const TYPICAL_MOVES: usize = 218;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::TYPICAL_MOVES),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if the list contains the move.
    pub fn contains(&self, m: Move) -> bool {
        self.moves.contains(&m)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the pseudo-legal destinations of the piece on `from`, or an empty
/// list if the square is empty.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut moves = MoveList::new();
    pieces::generate_piece_moves(board, from, piece, &mut moves);
    moves.iter().map(|m| m.to()).collect()
}

/// Generates the pseudo-legal moves of every piece of `side`, whether or not
/// `side` is to move. Pieces are visited a1 first, h8 last.
pub fn generate_pseudo_legal(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces(side) {
        pieces::generate_piece_moves(board, from, piece, &mut moves);
    }
    moves
}

/// Returns true if the king of `side` is attacked by any piece of the
/// opponent, regardless of whose turn it is.
pub fn is_in_check(board: &Board, side: Side) -> Result<bool, RulesError> {
    let king = board
        .king_square(side)
        .ok_or(RulesError::MissingKing(side))?;
    Ok(generate_pseudo_legal(board, side.opponent())
        .iter()
        .any(|m| m.to() == king))
}

/// Generates all legal moves for the side to move, in generation order.
pub fn legal_moves(board: &Board) -> Result<MoveList, RulesError> {
    let us = board.side_to_move();
    let mut legal = MoveList::new();
    for &m in &generate_pseudo_legal(board, us) {
        let next = make_move(board, m)?;
        if !is_in_check(&next, us)? {
            legal.push(m);
        }
    }
    Ok(legal)
}

/// Returns true if the side to move is in check and has no legal move.
pub fn is_checkmate(board: &Board) -> Result<bool, RulesError> {
    Ok(is_in_check(board, board.side_to_move())? && legal_moves(board)?.is_empty())
}

/// Returns true if the side to move is not in check and has no legal move.
pub fn is_stalemate(board: &Board) -> Result<bool, RulesError> {
    Ok(!is_in_check(board, board.side_to_move())? && legal_moves(board)?.is_empty())
}

/// Plays a move and returns the resulting board.
///
/// The destination receives the moving piece, the origin is emptied and the
/// side to move flips. Nothing else changes. The move does not have to be
/// legal, but it must be made by a piece of the side to move and must not
/// land on one of its own pieces.
pub fn make_move(board: &Board, m: Move) -> Result<Board, RulesError> {
    let us = board.side_to_move();
    let piece = board
        .piece_at(m.from())
        .ok_or(RulesError::EmptyOrigin(m))?;
    if piece.side != us {
        return Err(RulesError::NotSideToMove(m, us));
    }
    if board.piece_at(m.to()).is_some_and(|target| target.side == us) {
        return Err(RulesError::OwnPieceCapture(m));
    }

    let mut squares = *board.squares();
    squares[m.from().index() as usize] = None;
    squares[m.to().index() as usize] = Some(piece);
    Ok(Board::from_parts(squares, us.opponent()))
}
