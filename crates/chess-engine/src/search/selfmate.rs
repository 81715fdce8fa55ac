//! Selfmate in two: White forces Black to deliver mate on White's second
//! move.

use super::{require_side_to_move, SearchError, Solution, Variation};
use crate::movegen::{is_checkmate, legal_moves, make_move, RulesError};
use crate::Board;
use chess_core::{Move, Side};

/// Solves a White-to-play selfmate in two.
///
/// A key is skipped when Black has no reply to it. A Black reply after which
/// White has no legal move is not a refutation and is left out of the tree.
/// Every other reply must be met by a White move that leaves Black at least
/// one move, all of which checkmate White.
pub fn selfmate_in_two(board: &Board) -> Result<Option<Solution>, SearchError> {
    require_side_to_move(board, Side::White)?;

    tracing::info!("Searching for selfmate in 2");
    for key in &legal_moves(board)? {
        tracing::debug!("Working on key {}", key);

        let next = make_move(board, *key)?;
        let replies = legal_moves(&next)?;
        if replies.is_empty() {
            tracing::debug!("Key {} leaves Black without a move", key);
            continue;
        }

        let mut variations = Vec::with_capacity(replies.len());
        let mut refuted = false;
        for reply in &replies {
            let after = make_move(&next, *reply)?;
            let answers = legal_moves(&after)?;
            if answers.is_empty() {
                continue;
            }

            match forcing_answer(&after, answers.as_slice())? {
                Some(answer) => variations.push(Variation {
                    reply: *reply,
                    continuation: Solution::leaf(answer),
                }),
                None => {
                    tracing::debug!("Key {} can be answered by {}", key, reply);
                    refuted = true;
                    break;
                }
            }
        }

        if !refuted {
            tracing::info!("Selfmate in 2 found, key {}", key);
            return Ok(Some(Solution {
                key: *key,
                variations,
            }));
        }
    }

    tracing::info!("No selfmate in 2");
    Ok(None)
}

/// Finds the first White move after which Black has moves and every one of
/// them mates White.
fn forcing_answer(board: &Board, answers: &[Move]) -> Result<Option<Move>, RulesError> {
    for answer in answers {
        let next = make_move(board, *answer)?;
        let forced = legal_moves(&next)?;
        if forced.is_empty() {
            continue;
        }
        if only_mating_moves(&next, forced.as_slice())? {
            return Ok(Some(*answer));
        }
    }
    Ok(None)
}

fn only_mating_moves(board: &Board, moves: &[Move]) -> Result<bool, RulesError> {
    for m in moves {
        if !is_checkmate(&make_move(board, *m)?)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    // White Kh1 Bg1 Nf5 Rb8, Black Kh3 pg4.
    const SELFMATE: &str = "
        -r------
        --------
        --------
        -----n--
        ------P-
        -------K
        --------
        ------bk
    ";

    #[test]
    fn finds_a_selfmate_and_every_branch_holds() {
        let board = Board::parse(SELFMATE, Side::White).unwrap();
        let solution = selfmate_in_two(&board).unwrap().unwrap();

        let next = make_move(&board, solution.key).unwrap();
        assert!(!legal_moves(&next).unwrap().is_empty());

        for variation in &solution.variations {
            assert!(variation.continuation.is_leaf());
            let after = make_move(&next, variation.reply).unwrap();
            let answered = make_move(&after, variation.continuation.key).unwrap();
            let forced = legal_moves(&answered).unwrap();
            assert!(!forced.is_empty());
            for m in &forced {
                assert!(is_checkmate(&make_move(&answered, *m).unwrap()).unwrap());
            }
        }
    }

    #[test]
    fn stalemate_has_no_selfmate() {
        let text = "
            -------K
            --------
            --------
            --------
            --------
            -Q------
            --------
            k-------
        ";
        let board = Board::parse(text, Side::White).unwrap();
        assert_eq!(selfmate_in_two(&board), Ok(None));
    }

    #[test]
    fn requires_white_to_move() {
        let board = Board::parse(SELFMATE, Side::Black).unwrap();
        assert!(matches!(
            selfmate_in_two(&board),
            Err(SearchError::WrongSideToMove { .. })
        ));
    }
}
