//! Direct mates: the side to move forces checkmate against any defence.

use super::{require_side_to_move, SearchError, Solution, Variation};
use crate::movegen::{is_in_check, legal_moves, make_move, RulesError};
use crate::Board;
use chess_core::Side;

/// Finds a move that checkmates immediately.
pub fn mate_in_one(board: &Board) -> Result<Option<Solution>, SearchError> {
    forced_mate(board, 1)
}

/// Solves a White-to-play mate in two.
pub fn mate_in_two(board: &Board) -> Result<Option<Solution>, SearchError> {
    require_side_to_move(board, Side::White)?;
    forced_mate(board, 2)
}

/// Solves a White-to-play mate in three.
pub fn mate_in_three(board: &Board) -> Result<Option<Solution>, SearchError> {
    require_side_to_move(board, Side::White)?;
    forced_mate(board, 3)
}

/// Solves a White-to-play mate in four.
pub fn mate_in_four(board: &Board) -> Result<Option<Solution>, SearchError> {
    require_side_to_move(board, Side::White)?;
    forced_mate(board, 4)
}

/// Finds the first key after which the side to move mates in at most
/// `moves` moves whatever the opponent replies.
///
/// A key that leaves the opponent without a legal reply counts only when it
/// is checkmate; stalemating keys are rejected. The returned tree holds, for
/// every reply to the key, the continuation that defeats it.
pub fn forced_mate(board: &Board, moves: usize) -> Result<Option<Solution>, SearchError> {
    if moves == 0 {
        return Err(SearchError::InvalidDepth);
    }

    tracing::info!(
        "Searching for mate in {} with {} to move",
        moves,
        board.side_to_move()
    );
    let solution = search(board, moves, true)?;
    match &solution {
        Some(solution) => tracing::info!("Mate in {} found, key {}", moves, solution.key),
        None => tracing::info!("No mate in {}", moves),
    }
    Ok(solution)
}

/// Depth-first search behind [`forced_mate`]. Only the top level reports
/// progress.
fn search(board: &Board, moves: usize, report: bool) -> Result<Option<Solution>, RulesError> {
    for key in &legal_moves(board)? {
        if report {
            tracing::debug!("Working on key {}", key);
        }

        let next = make_move(board, *key)?;
        let replies = legal_moves(&next)?;

        if replies.is_empty() {
            if is_in_check(&next, next.side_to_move())? {
                return Ok(Some(Solution::leaf(*key)));
            }
            continue;
        }
        if moves == 1 {
            continue;
        }

        let mut variations = Vec::with_capacity(replies.len());
        let mut refuted = false;
        for reply in &replies {
            let after = make_move(&next, *reply)?;
            match search(&after, moves - 1, false)? {
                Some(continuation) => variations.push(Variation {
                    reply: *reply,
                    continuation,
                }),
                None => {
                    if report {
                        tracing::debug!("Key {} can be answered by {}", key, reply);
                    }
                    refuted = true;
                    break;
                }
            }
        }

        if !refuted {
            return Ok(Some(Solution {
                key: *key,
                variations,
            }));
        }
    }

    Ok(None)
}
