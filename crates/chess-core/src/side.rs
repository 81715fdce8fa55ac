//! Player side representation.

use crate::Rank;

/// The two sides of a chess problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the rank step a pawn of this side advances by (+1 or -1).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Returns the rank this side's pawns start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> Rank {
        match self {
            Side::White => Rank::R2,
            Side::Black => Rank::R7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_side() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
        for side in Side::ALL {
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Side::White.pawn_direction(), 1);
        assert_eq!(Side::Black.pawn_direction(), -1);
    }

    #[test]
    fn pawn_home_rank() {
        assert_eq!(Side::White.pawn_home_rank(), Rank::R2);
        assert_eq!(Side::Black.pawn_home_rank(), Rank::R7);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::White), "White");
        assert_eq!(format!("{}", Side::Black), "Black");
    }
}
