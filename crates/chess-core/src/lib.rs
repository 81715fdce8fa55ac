//! Core types for chess problems.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! the solver front end:
//! - [`Side`] for the two players
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`PieceKind`] and [`Piece`] for occupants
//! - [`Move`] for plain from/to moves
//! - [`Diagram`] for the 8x8 text layout problems are stored in
//!
//! Promotion, castling and en passant are not representable here.

mod diagram;
mod mov;
mod piece;
mod side;
mod square;

pub use diagram::{Diagram, DiagramError};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{File, Rank, Square};
