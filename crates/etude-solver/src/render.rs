//! Plain-text presentation of boards and solutions.

use crate::solve::{Outcome, Report};
use chess_core::{File, Rank, Square};
use chess_engine::notation::{describe_line, move_to_notation};
use chess_engine::{make_move, Board, HelpmateLine, RulesError, Solution};

const INDENT: &str = "    ";

/// Printed when no solution exists.
pub const NO_SOLUTION: &str = "No solution found.\n\
Promotion, castling and en passant are not generated; the solution may need one of them.";

/// Draws the board inside a frame with rank and file labels, rank 8 on top.
/// Upper-case letters are Black pieces, as in the input diagram.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from(" +-----------------+\n");
    for rank in Rank::ALL.iter().rev() {
        out.push(rank.to_char());
        out.push('|');
        for file in File::ALL {
            out.push(' ');
            out.push(
                board
                    .piece_at(Square::new(file, *rank))
                    .map_or('-', |piece| piece.to_diagram_char()),
            );
        }
        out.push_str(" |\n");
    }
    out.push_str(" +-----------------+\n");
    out.push_str("   a b c d e f g h\n");
    out
}

/// Renders a whole report: the board, then the solution or a no-solution
/// notice.
pub fn render_report(report: &Report) -> Result<String, RulesError> {
    let mut out = format!(
        "{}\n{}, {} to move\n\n",
        render_board(&report.board),
        report.etude.title(),
        report.board.side_to_move()
    );

    if report.outcome.is_empty() {
        out.push_str(NO_SOLUTION);
        out.push('\n');
        return Ok(out);
    }

    match &report.outcome {
        Outcome::Forced(Some(solution)) => {
            for line in render_solution(&report.board, solution)? {
                out.push_str(&line);
                out.push('\n');
            }
        }
        Outcome::Forced(None) => {}
        Outcome::Helpmate { lines, .. } => {
            for (index, line) in lines.iter().enumerate() {
                out.push_str(&format!(
                    "Solution #{}: {}\n",
                    index + 1,
                    render_helpmate_line(&report.board, line)?
                ));
            }
            if report.outcome.limit_reached() {
                out.push_str(&format!("\nAll {} requested solutions were found.\n", lines.len()));
            } else {
                out.push_str(&format!("\nFound {} solution(s).\n", lines.len()));
            }
        }
    }
    Ok(out)
}

/// Renders a solution tree: the key, then each group of replies followed by
/// the answer that defeats them, nested for deeper problems.
pub fn render_solution(board: &Board, solution: &Solution) -> Result<Vec<String>, RulesError> {
    let mut lines = vec![format!(
        "1. {} is the solution!",
        move_to_notation(board, solution.key)?
    )];
    write_variations(&mut lines, board, solution, 1, 1)?;
    Ok(lines)
}

fn write_variations(
    lines: &mut Vec<String>,
    board: &Board,
    solution: &Solution,
    number: usize,
    depth: usize,
) -> Result<(), RulesError> {
    let after_key = make_move(board, solution.key)?;
    for group in solution.grouped_variations() {
        for reply in &group.replies {
            lines.push(format!(
                "{}{}... {}",
                INDENT.repeat(depth),
                number,
                move_to_notation(&after_key, *reply)?
            ));
        }
        let after_reply = make_move(&after_key, group.replies[0])?;
        lines.push(format!(
            "{}{}. {}",
            INDENT.repeat(depth + 1),
            number + 1,
            move_to_notation(&after_reply, group.continuation.key)?
        ));
        write_variations(lines, &after_reply, group.continuation, number + 1, depth + 2)?;
    }
    Ok(())
}

/// Renders a helpmate line as `1. b6 Ra2 2. b5 Ra8#`.
pub fn render_helpmate_line(board: &Board, line: &HelpmateLine) -> Result<String, RulesError> {
    let written = describe_line(board, &line.moves)?;
    let parts: Vec<String> = written
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| {
            let moves: Vec<String> = pair.iter().map(ToString::to_string).collect();
            format!("{}. {}", index + 1, moves.join(" "))
        })
        .collect();
    Ok(parts.join(" "))
}
