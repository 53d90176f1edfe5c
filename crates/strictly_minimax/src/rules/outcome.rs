//! Outcome evaluation: the single entry point for terminal detection.

use super::win::check_winner;
use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// Lines are checked rows, then columns, then diagonals; the first complete
/// line decides the winner. Otherwise a full board is a tie. Total over every
/// board, including ones no legal game could reach.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::WonBy(mark)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::WonBy(Mark::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::new().with_mark(crate::Position::Center, Mark::X);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_unreachable_board_is_still_evaluated() {
        // Nine O marks: no legal game gets here.
        let board: Board = "OOO OOO OOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::WonBy(Mark::O));
    }
}
