//! Strictly Minimax - tic-tac-toe rules and an optimal computer opponent.
//!
//! The crate exposes two operations to a presentation layer:
//!
//! - [`evaluate`]: the [`Outcome`] of any board (in progress, won, or tied)
//! - [`best_move`]: the computer's optimal move on an in-progress board
//!
//! Neither operation performs I/O or keeps state between calls, so both are
//! safe to call concurrently on different boards.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, Outcome, Position, best_move, evaluate};
//!
//! let board: Board = "XX. .O. ...".parse()?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! // O must block the top row.
//! assert_eq!(best_move(&board, Mark::O)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod rules;
mod search;
mod types;

pub use position::Position;
pub use rules::{LINES, Line, check_winner, evaluate, winning_line};
pub use search::{SearchError, WIN_SCORE, best_move};
pub use types::{Board, BoardParseError, Mark, Outcome, Square};
