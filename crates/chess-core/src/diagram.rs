//! Board diagram parsing and serialization.
//!
//! A diagram is the plain-text layout chess problems are stored in: eight
//! rows of eight characters, rank 8 first, files a to h left to right.
//!
//! ```text
//! -------K
//! ------PP
//! --------
//! ---q----
//! --------
//! -------n
//! --------
//! -k------
//! ```
//!
//! Piece letters are `k q r b n p`; lower case is White, upper case is
//! Black. [`Diagram::EMPTY`] (`-`) marks an empty square. Blank lines and
//! whitespace around rows are ignored.

use crate::{File, Piece, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing a diagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid diagram: row for rank {rank} has {len} squares, expected 8")]
    InvalidRowLength { rank: Rank, len: usize },

    #[error("invalid diagram: unknown character '{ch}' on {square}")]
    InvalidCharacter { square: Square, ch: char },
}

/// A validated board layout.
///
/// This holds only piece placement; the side to move is supplied separately
/// when the engine builds a board from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    squares: [Option<Piece>; Square::COUNT],
}

impl Diagram {
    /// Marker for an empty square.
    pub const EMPTY: char = '-';

    /// The standard starting position.
    pub const STANDARD: &'static str = "\
RNBQKBNR
PPPPPPPP
--------
--------
--------
--------
pppppppp
rnbqkbnr
";

    /// Parses a diagram from text.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut squares = [None; Square::COUNT];
        for (row, rank) in rows.iter().zip(Rank::ALL.iter().rev()) {
            let len = row.chars().count();
            if len != 8 {
                return Err(DiagramError::InvalidRowLength { rank: *rank, len });
            }

            for (ch, file) in row.chars().zip(File::ALL) {
                let square = Square::new(file, *rank);
                if ch == Self::EMPTY {
                    continue;
                }
                let piece = Piece::from_diagram_char(ch)
                    .ok_or(DiagramError::InvalidCharacter { square, ch })?;
                squares[square.index() as usize] = Some(piece);
            }
        }

        Ok(Diagram { squares })
    }

    /// Builds a diagram from a square-indexed placement.
    pub fn from_squares(squares: [Option<Piece>; Square::COUNT]) -> Self {
        Diagram { squares }
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Returns the placement indexed by [`Square::index`].
    pub fn squares(&self) -> &[Option<Piece>; Square::COUNT] {
        &self.squares
    }

    /// Returns the eight rows of the diagram, rank 8 first.
    pub fn rows(&self) -> Vec<String> {
        Rank::ALL
            .iter()
            .rev()
            .map(|&rank| {
                File::ALL
                    .iter()
                    .map(|&file| {
                        self.piece_at(Square::new(file, rank))
                            .map_or(Self::EMPTY, Piece::to_diagram_char)
                    })
                    .collect()
            })
            .collect()
    }

    /// Converts the diagram back to text, one row per line.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(72);
        for row in self.rows() {
            text.push_str(&row);
            text.push('\n');
        }
        text
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }
}
