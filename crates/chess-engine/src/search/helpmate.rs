//! Helpmates: Black moves first and both sides cooperate towards mate.

use super::{require_side_to_move, SearchError};
use crate::movegen::{is_checkmate, legal_moves, make_move, RulesError};
use crate::Board;
use chess_core::{Move, Side};

/// A cooperative line, Black's move first, after which the side to move is
/// checkmated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HelpmateLine {
    pub moves: Vec<Move>,
}

/// Solves a helpmate in two with Black to move.
///
/// See [`helpmate`] for `max_solutions`.
pub fn helpmate_in_two(
    board: &Board,
    max_solutions: usize,
) -> Result<Vec<HelpmateLine>, SearchError> {
    require_side_to_move(board, Side::Black)?;
    helpmate(board, 2, max_solutions)
}

/// Collects lines of `moves` Black and White move pairs after which the side
/// to move is checkmated.
///
/// Mate is tested only after the final ply. The search stops once
/// `max_solutions` lines were found; `0` collects every line.
pub fn helpmate(
    board: &Board,
    moves: usize,
    max_solutions: usize,
) -> Result<Vec<HelpmateLine>, SearchError> {
    if moves == 0 {
        return Err(SearchError::InvalidDepth);
    }

    tracing::info!(
        "Searching for helpmate in {} (limit {})",
        moves,
        max_solutions
    );
    let mut collector = Collector {
        line: Vec::with_capacity(moves * 2),
        found: Vec::new(),
        max_solutions,
    };
    collector.walk(board, moves * 2)?;
    tracing::info!("Found {} helpmate line(s)", collector.found.len());
    Ok(collector.found)
}

struct Collector {
    line: Vec<Move>,
    found: Vec<HelpmateLine>,
    max_solutions: usize,
}

impl Collector {
    /// Returns true once the solution limit is reached.
    fn walk(&mut self, board: &Board, plies: usize) -> Result<bool, RulesError> {
        if plies == 0 {
            if is_checkmate(board)? {
                tracing::trace!("Helpmate line {:?}", self.line);
                self.found.push(HelpmateLine {
                    moves: self.line.clone(),
                });
                return Ok(self.max_solutions != 0 && self.found.len() >= self.max_solutions);
            }
            return Ok(false);
        }

        for m in &legal_moves(board)? {
            if self.line.is_empty() {
                tracing::debug!("Working on first move {}", m);
            }
            self.line.push(*m);
            let done = self.walk(&make_move(board, *m)?, plies - 1)?;
            self.line.pop();
            if done {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
