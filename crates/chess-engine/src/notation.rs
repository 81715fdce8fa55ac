//! Short algebraic notation for presenting solutions.
//!
//! Moves are written the way problem solutions are usually printed: the
//! piece letter (none for pawns), `x` and the pawn's origin file on a
//! capture, the destination square, and `+` or `#` when the move gives check
//! or mate. Examples: "Nf3", "Qxh7#", "exd5+".
//!
//! Two pieces of the same kind that can reach the same square are not
//! disambiguated.

use crate::movegen::{is_checkmate, is_in_check, make_move, RulesError};
use crate::Board;
use chess_core::{Move, PieceKind, Square};
use std::fmt;

/// Effect of a move on the opponent's king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// The opponent is not in check.
    Quiet,
    /// The opponent is in check but has a legal reply.
    Check,
    /// The opponent is checkmated.
    Mate,
}

impl CheckStatus {
    /// Returns the notation suffix for this status.
    pub const fn suffix(self) -> &'static str {
        match self {
            CheckStatus::Quiet => "",
            CheckStatus::Check => "+",
            CheckStatus::Mate => "#",
        }
    }
}

/// Everything needed to write a move down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveNotation {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    pub status: CheckStatus,
}

impl MoveNotation {
    /// Returns the underlying move.
    pub const fn mv(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.notation_letter() {
            Some(letter) => write!(f, "{}", letter)?,
            None if self.capture => write!(f, "{}", self.from.file())?,
            None => {}
        }
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}{}", self.to, self.status.suffix())
    }
}

/// Describes a move played from `board`.
///
/// The board must be the state BEFORE the move is made. The move is played
/// to determine the check status, so it must satisfy the preconditions of
/// [`make_move`].
pub fn describe_move(board: &Board, m: Move) -> Result<MoveNotation, RulesError> {
    let piece = board
        .piece_at(m.from())
        .ok_or(RulesError::EmptyOrigin(m))?;
    let capture = board.piece_at(m.to()).is_some();

    let next = make_move(board, m)?;
    let status = if !is_in_check(&next, next.side_to_move())? {
        CheckStatus::Quiet
    } else if is_checkmate(&next)? {
        CheckStatus::Mate
    } else {
        CheckStatus::Check
    };

    Ok(MoveNotation {
        kind: piece.kind,
        from: m.from(),
        to: m.to(),
        capture,
        status,
    })
}

/// Converts a move to notation given the board it is played from.
pub fn move_to_notation(board: &Board, m: Move) -> Result<String, RulesError> {
    Ok(describe_move(board, m)?.to_string())
}

/// Describes a sequence of moves, each played from the board the previous
/// one left behind.
pub fn describe_line(board: &Board, moves: &[Move]) -> Result<Vec<MoveNotation>, RulesError> {
    let mut current = *board;
    let mut line = Vec::with_capacity(moves.len());
    for &m in moves {
        line.push(describe_move(&current, m)?);
        current = make_move(&current, m)?;
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Side;

    const PHILIDOR: &str = "
        ----R--K
        ------PP
        -------n
        ---q----
        --------
        --------
        --------
        -k------
    ";

    fn mv(s: &str) -> Move {
        Move::from_coordinate(s).unwrap()
    }

    #[test]
    fn pawn_push() {
        let board = Board::standard();
        assert_eq!(move_to_notation(&board, mv("e2e4")).unwrap(), "e4");
    }

    #[test]
    fn knight_move() {
        let board = Board::standard();
        assert_eq!(move_to_notation(&board, mv("g1f3")).unwrap(), "Nf3");
    }

    #[test]
    fn pawn_capture_uses_origin_file() {
        let text = "\
-------K
--------
--------
---P----
----p---
--------
--------
k-------";
        let board = Board::parse(text, Side::White).unwrap();
        let notation = describe_move(&board, mv("e4d5")).unwrap();
        assert!(notation.capture);
        assert_eq!(notation.status, CheckStatus::Quiet);
        assert_eq!(notation.to_string(), "exd5");
    }

    #[test]
    fn check_and_mate_suffixes() {
        let board = Board::parse(PHILIDOR, Side::White).unwrap();
        assert_eq!(move_to_notation(&board, mv("d5g8")).unwrap(), "Qg8+");

        let line = describe_line(&board, &[mv("d5g8"), mv("e8g8"), mv("h6f7")]).unwrap();
        let written: Vec<String> = line.iter().map(ToString::to_string).collect();
        assert_eq!(written, vec!["Qg8+", "Rxg8", "Nf7#"]);
        assert_eq!(line[2].status, CheckStatus::Mate);
        assert_eq!(line[1].mv(), mv("e8g8"));
    }

    #[test]
    fn black_moves_use_the_same_letters() {
        let board = Board::standard().with_side_to_move(Side::Black).unwrap();
        assert_eq!(move_to_notation(&board, mv("b8c6")).unwrap(), "Nc6");
        assert_eq!(move_to_notation(&board, mv("d7d5")).unwrap(), "d5");
    }

    #[test]
    fn illegal_move_is_an_error() {
        let board = Board::standard();
        assert_eq!(
            move_to_notation(&board, mv("e3e4")),
            Err(RulesError::EmptyOrigin(mv("e3e4")))
        );
    }
}
