//! Chess rules engine and forced-mate solver.
//!
//! This crate provides:
//! - [`Board`] - an immutable 8x8 position plus the side to move
//! - Per-piece pseudo-legal move generation and the legality filter
//! - [`make_move`] - the move executor, producing a new board per move
//! - Move notation for presenting solutions
//! - Mate searches: direct mate in N, selfmate in 2, helpmate in 2
//!
//! Promotion, castling and en passant are not modelled; a problem whose
//! solution needs one of them is reported as having no solution.
//!
//! # Example
//!
//! ```
//! use chess_core::Side;
//! use chess_engine::{search, Board};
//!
//! let board = Board::parse(
//!     "----R--K
//!      ------PP
//!      -------n
//!      ---q----
//!      --------
//!      --------
//!      --------
//!      -k------",
//!     Side::White,
//! )
//! .unwrap();
//!
//! let solution = search::mate_in_two(&board).unwrap().expect("Philidor's mate");
//! assert_eq!(solution.key.to_coordinate(), "d5g8");
//! ```

mod board;
pub mod movegen;
pub mod notation;
pub mod search;

pub use board::{Board, BoardError};
pub use movegen::{
    generate_pseudo_legal, is_checkmate, is_in_check, is_stalemate, legal_moves, make_move,
    pseudo_legal_destinations, MoveList, RulesError,
};
pub use notation::{describe_move, move_to_notation, CheckStatus, MoveNotation};
pub use search::{HelpmateLine, SearchError, Solution, Variation, VariationGroup};
