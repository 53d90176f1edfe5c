//! Non-interactive commands: query the engine and watch it play itself.

use crate::config::{FirstPlayer, SoloConfig};
use crate::notify::TracingObserver;
use crate::session::{RoundStatus, Session, Side};
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_minimax::{Board, Mark, Outcome, best_move, evaluate, winning_line};
use tracing::instrument;

/// The engine's answer for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Chosen square, 0-8.
    pub index: usize,
    /// Human-readable square name.
    pub label: &'static str,
    /// Mark the engine plays.
    pub mark: Mark,
}

/// Evaluation of one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    /// Board outcome.
    pub outcome: Outcome,
    /// Squares of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
}

/// A full round with the engine on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfplayReport {
    /// Moves in order, with the side that made each.
    pub moves: Vec<(Side, usize)>,
    /// Final status.
    pub status: RoundStatus,
    /// Final board, rendered.
    pub board: String,
}

/// Asks the engine for `computer`'s move on `board`.
#[instrument(skip(board))]
pub fn best_move_report(board: &Board, computer: Mark) -> Result<MoveReport> {
    let position = best_move(board, computer).context("Cannot choose a move")?;
    Ok(MoveReport {
        index: position.to_index(),
        label: position.label(),
        mark: computer,
    })
}

/// Evaluates `board`.
#[instrument(skip(board))]
pub fn evaluation_report(board: &Board) -> EvaluationReport {
    EvaluationReport {
        outcome: evaluate(board),
        winning_line: winning_line(board).map(|line| line.0.map(|p| p.to_index())),
    }
}

/// Plays one round in which the engine also chooses the human's moves.
///
/// Under perfect play on both sides the round always ends in a tie.
#[instrument]
pub fn selfplay(human_mark: Mark, first_player: FirstPlayer) -> Result<SelfplayReport> {
    let config = SoloConfig::default()
        .with_first_player(first_player)
        .with_human_mark(human_mark);
    let mut session = Session::new(&config).with_observer(TracingObserver);
    let human = session.mark_of(Side::Human);
    let mut moves = Vec::new();

    while let Some(side) = session.status().to_move() {
        let position = match side {
            Side::Human => {
                let pos = best_move(session.board(), human)?;
                session.play_human(pos)?;
                pos
            }
            Side::Computer => session.play_computer()?,
        };
        moves.push((side, position.to_index()));
    }

    Ok(SelfplayReport {
        moves,
        status: session.status(),
        board: session.board().display(),
    })
}
