//! Score tally across rounds.

use crate::session::RoundStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins and ties accumulated over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    human_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    /// Records a finished round. In-progress statuses are ignored.
    #[instrument]
    pub fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::HumanWon => self.human_wins += 1,
            RoundStatus::ComputerWon => self.computer_wins += 1,
            RoundStatus::Tie => self.ties += 1,
            RoundStatus::HumanTurn | RoundStatus::ComputerTurn => return,
        }
        debug!(
            human = self.human_wins,
            computer = self.computer_wins,
            ties = self.ties,
            "Score updated"
        );
    }

    /// Zeroes every tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
