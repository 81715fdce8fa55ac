//! JSON output for solved problems.
//!
//! The document holds the problem type, the input diagram rows and either
//! the solution tree (direct mates and selfmates) or the helpmate lines.
//! Moves carry both their notation and their coordinates:
//!
//! ```json
//! {
//!   "etude": "mate_in_2",
//!   "side_to_move": "White",
//!   "diagram": ["----R--K", "..."],
//!   "solved": true,
//!   "solution": {
//!     "key": { "notation": "Qg8+", "coordinate": "d5g8" },
//!     "variations": [
//!       {
//!         "reply": { "notation": "Rxg8", "coordinate": "e8g8" },
//!         "continuation": { "key": { "notation": "Nf7#", "coordinate": "h6f7" }, "variations": [] }
//!       }
//!     ]
//!   }
//! }
//! ```

use crate::cli::EtudeType;
use crate::solve::{Outcome, Report};
use chess_core::Move;
use chess_engine::notation::{describe_line, move_to_notation};
use chess_engine::{make_move, Board, RulesError, Solution};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building the JSON document.
#[derive(Debug, Error)]
pub enum JsonOutputError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ReportJson {
    etude: EtudeType,
    side_to_move: String,
    diagram: Vec<String>,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<SolutionJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    helpmates: Option<Vec<Vec<MoveJson>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_reached: Option<bool>,
}

#[derive(Serialize)]
struct MoveJson {
    notation: String,
    coordinate: String,
}

#[derive(Serialize)]
struct SolutionJson {
    key: MoveJson,
    variations: Vec<VariationJson>,
}

#[derive(Serialize)]
struct VariationJson {
    reply: MoveJson,
    continuation: SolutionJson,
}

fn move_json(board: &Board, m: Move) -> Result<MoveJson, RulesError> {
    Ok(MoveJson {
        notation: move_to_notation(board, m)?,
        coordinate: m.to_coordinate(),
    })
}

fn solution_json(board: &Board, solution: &Solution) -> Result<SolutionJson, RulesError> {
    let key = move_json(board, solution.key)?;
    let after_key = make_move(board, solution.key)?;
    let mut variations = Vec::with_capacity(solution.variations.len());
    for variation in &solution.variations {
        let after_reply = make_move(&after_key, variation.reply)?;
        variations.push(VariationJson {
            reply: move_json(&after_key, variation.reply)?,
            continuation: solution_json(&after_reply, &variation.continuation)?,
        });
    }
    Ok(SolutionJson { key, variations })
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String, JsonOutputError> {
    let board = &report.board;
    let mut document = ReportJson {
        etude: report.etude,
        side_to_move: board.side_to_move().to_string(),
        diagram: board.to_diagram().rows(),
        solved: !report.outcome.is_empty(),
        solution: None,
        helpmates: None,
        limit_reached: None,
    };

    match &report.outcome {
        Outcome::Forced(solution) => {
            document.solution = solution
                .as_ref()
                .map(|solution| solution_json(board, solution))
                .transpose()?;
        }
        Outcome::Helpmate { lines, .. } => {
            let mut helpmates = Vec::with_capacity(lines.len());
            for line in lines {
                let written = describe_line(board, &line.moves)?;
                helpmates.push(
                    written
                        .iter()
                        .map(|notation| MoveJson {
                            notation: notation.to_string(),
                            coordinate: notation.mv().to_coordinate(),
                        })
                        .collect(),
                );
            }
            document.helpmates = Some(helpmates);
            document.limit_reached = Some(report.outcome.limit_reached());
        }
    }

    Ok(serde_json::to_string_pretty(&document)?)
}
