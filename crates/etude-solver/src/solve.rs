//! Dispatches a parsed diagram to the search for the requested problem type.

use crate::cli::EtudeType;
use chess_core::Diagram;
use chess_engine::search::{
    helpmate_in_two, mate_in_four, mate_in_three, mate_in_two, selfmate_in_two,
};
use chess_engine::{Board, BoardError, HelpmateLine, SearchError, Solution};
use thiserror::Error;

/// Errors that stop a problem from being solved.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid position: {0}")]
    Board(#[from] BoardError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Direct mate or selfmate: a solution tree, or none.
    Forced(Option<Solution>),
    /// Helpmate: the lines found and the limit that was asked for.
    Helpmate {
        lines: Vec<HelpmateLine>,
        limit: usize,
    },
}

impl Outcome {
    /// Returns true if nothing was found.
    pub fn is_empty(&self) -> bool {
        match self {
            Outcome::Forced(solution) => solution.is_none(),
            Outcome::Helpmate { lines, .. } => lines.is_empty(),
        }
    }

    /// Returns true if a helpmate search stopped at its limit.
    pub fn limit_reached(&self) -> bool {
        match self {
            Outcome::Forced(_) => false,
            Outcome::Helpmate { lines, limit } => *limit != 0 && lines.len() >= *limit,
        }
    }
}

/// A solved (or unsolvable) problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub etude: EtudeType,
    pub board: Board,
    pub outcome: Outcome,
}

/// Sets up the board with the side that moves first in `etude` and runs the
/// matching search.
pub fn solve(
    etude: EtudeType,
    diagram: &Diagram,
    num_solutions: usize,
) -> Result<Report, SolveError> {
    let board = Board::from_diagram(diagram, etude.side_to_move())?;

    let outcome = match etude {
        EtudeType::MateInTwo => Outcome::Forced(mate_in_two(&board)?),
        EtudeType::MateInThree => Outcome::Forced(mate_in_three(&board)?),
        EtudeType::MateInFour => Outcome::Forced(mate_in_four(&board)?),
        EtudeType::Selfmate => Outcome::Forced(selfmate_in_two(&board)?),
        EtudeType::Helpmate => Outcome::Helpmate {
            lines: helpmate_in_two(&board, num_solutions)?,
            limit: num_solutions,
        },
    };

    Ok(Report {
        etude,
        board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Move, Side};

    const PHILIDOR: &str = "
        ----R--K
        ------PP
        -------n
        ---q----
        --------
        --------
        --------
        -k------
    ";

    #[test]
    fn mate_in_two_report() {
        let diagram = Diagram::parse(PHILIDOR).unwrap();
        let report = solve(EtudeType::MateInTwo, &diagram, 1).unwrap();
        assert_eq!(report.board.side_to_move(), Side::White);
        match &report.outcome {
            Outcome::Forced(Some(solution)) => {
                assert_eq!(solution.key, Move::from_coordinate("d5g8").unwrap())
            }
            other => panic!("Expected a solution, got {:?}", other),
        }
        assert!(!report.outcome.is_empty());
        assert!(!report.outcome.limit_reached());
    }

    #[test]
    fn helpmate_runs_with_black_to_move() {
        let text = "
            -------K
            -P------
            ------k-
            --------
            --------
            --------
            --------
            r-------
        ";
        let diagram = Diagram::parse(text).unwrap();
        let report = solve(EtudeType::Helpmate, &diagram, 2).unwrap();
        assert_eq!(report.board.side_to_move(), Side::Black);
        assert!(report.outcome.limit_reached());
    }

    #[test]
    fn invalid_position_is_reported() {
        let text = "--------\n".repeat(7) + "----k---\n";
        let diagram = Diagram::parse(&text).unwrap();
        assert!(matches!(
            solve(EtudeType::MateInTwo, &diagram, 1),
            Err(SolveError::Board(BoardError::KingCount { .. }))
        ));
    }
}
