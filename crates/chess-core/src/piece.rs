//! Chess piece representation.

use crate::Side;

/// The six kinds of chess pieces.
///
/// There is deliberately no "empty" kind: an empty square is `None` in an
/// `Option<Piece>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Returns the lower-case letter used for this kind in board diagrams.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Returns the upper-case letter used in move notation, or `None` for
    /// pawns, which are written without a letter.
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            kind => Some(kind.letter().to_ascii_uppercase()),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board: a kind and the side that owns it.
///
/// Pieces do not know where they stand; the board's square is the only
/// source of a piece's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Returns the diagram character for this piece.
    ///
    /// Diagrams write White in lower case and Black in upper case.
    pub const fn to_diagram_char(self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c,
            Side::Black => c.to_ascii_uppercase(),
        }
    }

    /// Parses a diagram character into a piece.
    ///
    /// Returns `None` for anything that is not a piece letter, including the
    /// empty-square marker.
    pub fn from_diagram_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::Black
        } else {
            Side::White
        };
        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == c.to_ascii_lowercase())?;
        Some(Piece::new(kind, side))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
