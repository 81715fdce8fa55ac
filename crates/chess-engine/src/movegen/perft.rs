//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling, en passant and promotion cannot occur within the first four
//! plies from the standard position, so the published counts apply there.

use super::{legal_moves, make_move, RulesError};
use crate::Board;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, depth: u32) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(board)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = make_move(board, *m)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, depth: u32) -> Result<Vec<(String, u64)>, RulesError> {
    let moves = legal_moves(board)?;
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let next = make_move(board, *m)?;
        let nodes = if depth > 1 {
            perft(&next, depth - 1)?
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
