//! Exhaustive minimax search for the computer's move.
//!
//! The tree is small enough (at most 9! leaf paths) to enumerate completely,
//! so there is no pruning and no heuristic cut-off: the returned move is
//! optimal under perfect play by both sides.

use crate::rules::evaluate;
use crate::{Board, Mark, Outcome, Position};
use tracing::{debug, instrument};

/// Base score of a win; the search depth is subtracted from it.
pub const WIN_SCORE: i32 = 10;

/// Error returned when the search is asked to move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or tied, so no legal move exists.
    #[display("No legal move available: board is already {}", _0)]
    NoLegalMove(Outcome),
}

impl std::error::Error for SearchError {}

/// Scores a terminal outcome from the computer's point of view.
///
/// Wins found sooner score higher and losses found later score higher.
fn score(outcome: Outcome, computer: Mark, depth: i32) -> i32 {
    match outcome {
        Outcome::WonBy(mark) if mark == computer => WIN_SCORE - depth,
        Outcome::WonBy(_) => depth - WIN_SCORE,
        Outcome::Tie | Outcome::InProgress => 0,
    }
}

/// Running state for one search invocation.
struct Search {
    computer: Mark,
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: Board, depth: i32, computer_to_move: bool) -> i32 {
        self.nodes += 1;

        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return score(outcome, self.computer, depth);
        }

        let mark = if computer_to_move {
            self.computer
        } else {
            self.computer.opponent()
        };

        let children = Position::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .map(|pos| board.with_mark(pos, mark));

        let mut best = if computer_to_move { i32::MIN } else { i32::MAX };
        for child in children {
            let value = self.minimax(child, depth + 1, !computer_to_move);
            best = if computer_to_move {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}

/// Returns the optimal move for `computer` on `board`.
///
/// Candidates are tried in increasing index order and only a strictly
/// better score replaces the current choice, so equally scored moves
/// resolve to the lowest index.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMove`] if the board is already won or tied.
#[instrument(skip(board), fields(board = ?board.squares(), computer = %computer))]
pub fn best_move(board: &Board, computer: Mark) -> Result<Position, SearchError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(SearchError::NoLegalMove(outcome));
    }

    let mut search = Search { computer, nodes: 0 };
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::valid_moves(board) {
        let value = search.minimax(board.with_mark(pos, computer), 0, false);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    // An in-progress board always has an empty square.
    let (pos, value) = best.ok_or(SearchError::NoLegalMove(outcome))?;
    debug!(
        position = pos.to_index(),
        score = value,
        nodes = search.nodes,
        "Search chose move"
    );
    Ok(pos)
}
