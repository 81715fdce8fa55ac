//! Forced-mate searches.
//!
//! Three problem families are supported:
//!
//! - [`direct`]: the mover forces mate (mate in one to four moves).
//! - [`selfmate`]: the mover forces the opponent to deliver mate.
//! - [`helpmate`]: both sides cooperate so that Black is mated.
//!
//! Every search walks the full legal move tree depth-first and reports the
//! first solution in generation order. Not finding a solution is a normal
//! result (`Ok(None)` or an empty list), never an error.

pub mod direct;
pub mod helpmate;
pub mod selfmate;

pub use direct::{forced_mate, mate_in_four, mate_in_one, mate_in_three, mate_in_two};
pub use helpmate::{helpmate, helpmate_in_two, HelpmateLine};
pub use selfmate::selfmate_in_two;

use crate::movegen::RulesError;
use crate::Board;
use chess_core::{Move, Side};
use thiserror::Error;

/// Errors reported by the searches.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("this problem needs {expected} to move, but {found} is to move")]
    WrongSideToMove { expected: Side, found: Side },

    #[error("a search needs at least one move")]
    InvalidDepth,
}

/// A key move and, for each reply to it, how the solver continues.
///
/// A leaf has no variations: the key itself completes the task (it mates,
/// or in a selfmate it leaves the opponent only mating moves).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    pub key: Move,
    pub variations: Vec<Variation>,
}

/// One opponent reply to a key and the sub-solution that defeats it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variation {
    pub reply: Move,
    pub continuation: Solution,
}

/// Replies that share an identical continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationGroup<'a> {
    pub replies: Vec<Move>,
    pub continuation: &'a Solution,
}

impl Solution {
    /// Creates a solution with no variations.
    pub fn leaf(key: Move) -> Self {
        Solution {
            key,
            variations: Vec::new(),
        }
    }

    /// Returns true if the solution has no variations.
    pub fn is_leaf(&self) -> bool {
        self.variations.is_empty()
    }

    /// Number of the solver's moves on the longest line, key included.
    pub fn depth(&self) -> usize {
        1 + self
            .variations
            .iter()
            .map(|v| v.continuation.depth())
            .max()
            .unwrap_or(0)
    }

    /// Groups the variations by continuation, in order of first appearance.
    pub fn grouped_variations(&self) -> Vec<VariationGroup<'_>> {
        let mut groups: Vec<VariationGroup<'_>> = Vec::new();
        for variation in &self.variations {
            match groups
                .iter_mut()
                .find(|group| *group.continuation == variation.continuation)
            {
                Some(group) => group.replies.push(variation.reply),
                None => groups.push(VariationGroup {
                    replies: vec![variation.reply],
                    continuation: &variation.continuation,
                }),
            }
        }
        groups
    }

    /// Every line from the key to a leaf, as moves alternating between the
    /// solver and the opponent.
    pub fn lines(&self) -> Vec<Vec<Move>> {
        if self.is_leaf() {
            return vec![vec![self.key]];
        }
        let mut lines = Vec::new();
        for variation in &self.variations {
            for tail in variation.continuation.lines() {
                let mut line = Vec::with_capacity(tail.len() + 2);
                line.push(self.key);
                line.push(variation.reply);
                line.extend(tail);
                lines.push(line);
            }
        }
        lines
    }
}

/// Fails unless `expected` is to move.
pub(crate) fn require_side_to_move(board: &Board, expected: Side) -> Result<(), SearchError> {
    let found = board.side_to_move();
    if found != expected {
        return Err(SearchError::WrongSideToMove { expected, found });
    }
    Ok(())
}
