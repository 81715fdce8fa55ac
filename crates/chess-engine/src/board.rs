//! Chess board representation.

use chess_core::{Diagram, DiagramError, Piece, PieceKind, Side, Square};
use thiserror::Error;

use crate::movegen::{is_in_check, RulesError};

/// Errors that can occur when building a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("expected exactly one {side} king, found {count}")]
    KingCount { side: Side, count: usize },

    #[error("{to_move} is to move but {in_check} is already in check")]
    OpponentInCheck { to_move: Side, in_check: Side },

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// A position: the occupant of every square plus the side to move.
///
/// Boards are values. Nothing mutates a board once it is built; the move
/// executor ([`crate::make_move`]) returns a fresh board instead, so every
/// branch of a search owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Side,
}

impl Board {
    /// Builds a board from a diagram.
    ///
    /// Each side must have exactly one king, and the side that is not to move
    /// must not already be in check.
    pub fn from_diagram(diagram: &Diagram, side_to_move: Side) -> Result<Self, BoardError> {
        let board = Board {
            squares: *diagram.squares(),
            side_to_move,
        };

        for side in Side::ALL {
            let count = board
                .pieces(side)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::KingCount { side, count });
            }
        }

        if is_in_check(&board, side_to_move.opponent())? {
            return Err(BoardError::OpponentInCheck {
                to_move: side_to_move,
                in_check: side_to_move.opponent(),
            });
        }

        Ok(board)
    }

    /// Parses diagram text and builds a board from it.
    pub fn parse(text: &str, side_to_move: Side) -> Result<Self, BoardError> {
        Self::from_diagram(&Diagram::parse(text)?, side_to_move)
    }

    /// Creates the standard starting position with White to move.
    pub fn standard() -> Self {
        Self::from_diagram(&Diagram::default(), Side::White).expect("STANDARD is valid")
    }

    /// Builds a board without validation. Only the move executor uses this.
    #[inline]
    pub(crate) const fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Side,
    ) -> Self {
        Board {
            squares,
            side_to_move,
        }
    }

    /// Returns the same placement with a different side to move, validated
    /// like [`Board::from_diagram`].
    pub fn with_side_to_move(&self, side_to_move: Side) -> Result<Self, BoardError> {
        Self::from_diagram(&self.to_diagram(), side_to_move)
    }

    /// Returns the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Returns the placement indexed by [`Square::index`].
    #[inline]
    pub(crate) const fn squares(&self) -> &[Option<Piece>; Square::COUNT] {
        &self.squares
    }

    /// Iterates over the pieces of one side, a1 first.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.side == side)
                .map(|piece| (square, piece))
        })
    }

    /// Returns the square of the given side's king.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Converts the placement back to a diagram.
    pub fn to_diagram(&self) -> Diagram {
        Diagram::from_squares(self.squares)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
