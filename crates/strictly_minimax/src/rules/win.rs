//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Position; 3]);

impl Line {
    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
    }
}

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in [`LINES`] order, if any.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().copied().find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line.owner(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".O. XO. XO.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some(LINES[4]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.O XO. O.X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some(LINES[7]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_owned() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert_eq!(LINES[0].owner(&board), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // X holds both the top row and the left column.
        let board: Board = "XXX XO. XOO".parse().unwrap();
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }
}
