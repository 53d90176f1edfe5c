//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the search engine and the presentation layer share the
//! exact same terminal detection.

mod outcome;
mod win;

pub use outcome::evaluate;
pub use win::{LINES, Line, check_winner, winning_line};
