//! Round lifecycle for a human playing the computer.

use crate::config::{FirstPlayer, SoloConfig};
use crate::notify::{Observer, RoundEvent};
use crate::scoreboard::Scoreboard;
use serde::{Deserialize, Serialize};
use strictly_minimax::{
    Board, Line, Mark, Outcome, Position, SearchError, Square, best_move, evaluate, winning_line,
};
use tracing::{debug, info, instrument, warn};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The person at the keyboard.
    #[strum(to_string = "You")]
    Human,
    /// The minimax opponent.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl Side {
    /// Possessive form used in player-facing messages.
    pub fn possessive(self) -> &'static str {
        match self {
            Side::Human => "your",
            Side::Computer => "the computer's",
        }
    }
}

impl From<FirstPlayer> for Side {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Human => Side::Human,
            FirstPlayer::Computer => Side::Computer,
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Waiting for the human.
    HumanTurn,
    /// Waiting for the computer.
    ComputerTurn,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled up with no line.
    Tie,
}

impl RoundStatus {
    /// Returns true once the round has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Self::HumanWon | Self::ComputerWon | Self::Tie)
    }

    /// Side expected to move, if the round is still running.
    pub fn to_move(self) -> Option<Side> {
        match self {
            Self::HumanTurn => Some(Side::Human),
            Self::ComputerTurn => Some(Side::Computer),
            _ => None,
        }
    }

    /// Status line shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Self::HumanTurn => "Your turn!",
            Self::ComputerTurn => "Computer's turn",
            Self::HumanWon => "Congratulations! You won this round!",
            Self::ComputerWon => "The computer won. Try again!",
            Self::Tie => "Tie! Nobody won this round.",
        }
    }

    fn waiting_for(side: Side) -> Self {
        match side {
            Side::Human => Self::HumanTurn,
            Side::Computer => Self::ComputerTurn,
        }
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The round has already ended.
    #[display("Round is already over")]
    RoundOver,

    /// The other side is expected to move.
    #[display("It's not {} turn", _0.possessive())]
    NotYourTurn(Side),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The engine refused to search.
    #[display("Search failed: {}", _0)]
    Search(SearchError),
}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        MoveError::Search(err)
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Search(err) => Some(err),
            _ => None,
        }
    }
}

/// A series of rounds between the human and the computer.
pub struct Session {
    board: Board,
    human_mark: Mark,
    first_player: Side,
    status: RoundStatus,
    round: u32,
    history: Vec<Position>,
    scoreboard: Scoreboard,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Starts round 1 with the configured marks and opening side.
    #[instrument(skip(config))]
    pub fn new(config: &SoloConfig) -> Self {
        let first_player = Side::from(*config.first_player());
        info!(human_mark = %config.human_mark(), ?first_player, "Starting session");
        Self {
            board: Board::new(),
            human_mark: *config.human_mark(),
            first_player,
            status: RoundStatus::waiting_for(first_player),
            round: 1,
            history: Vec::new(),
            scoreboard: Scoreboard::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for future events.
    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Builder form of [`Session::add_observer`].
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.add_observer(Box::new(observer));
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Squares played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Tallies across rounds.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Mark placed by `side`.
    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human_mark,
            Side::Computer => self.human_mark.opponent(),
        }
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Completed line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// Fails if the round is over, it is the computer's turn, or the square
    /// is occupied.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_human(&mut self, pos: Position) -> Result<RoundStatus, MoveError> {
        self.apply(Side::Human, pos)
    }

    /// Lets the engine pick and place the computer's mark.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_computer(&mut self) -> Result<Position, MoveError> {
        self.expect_turn(Side::Computer)?;
        let pos = best_move(&self.board, self.mark_of(Side::Computer))?;
        self.apply(Side::Computer, pos)?;
        Ok(pos)
    }

    /// Places a computer move chosen elsewhere (for example off-thread).
    #[instrument(skip(self), fields(round = self.round))]
    pub fn apply_computer(&mut self, pos: Position) -> Result<RoundStatus, MoveError> {
        self.apply(Side::Computer, pos)
    }

    /// Clears the board and keeps the scores.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.round += 1;
        self.status = RoundStatus::waiting_for(self.first_player);
        info!(round = self.round, "New round");
        self.notify(RoundEvent::RoundStarted { round: self.round });
    }

    /// Zeroes the scoreboard and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        self.notify(RoundEvent::ScoresReset);
        self.new_round();
    }

    fn expect_turn(&self, side: Side) -> Result<(), MoveError> {
        match self.status.to_move() {
            None => Err(MoveError::RoundOver),
            Some(expected) if expected != side => Err(MoveError::NotYourTurn(side)),
            Some(_) => Ok(()),
        }
    }

    fn apply(&mut self, side: Side, pos: Position) -> Result<RoundStatus, MoveError> {
        self.expect_turn(side)?;
        if !self.board.is_empty(pos) {
            warn!(?side, ?pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.mark_of(side);
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);

        let outcome = evaluate(&self.board);
        self.status = match outcome {
            Outcome::InProgress => RoundStatus::waiting_for(side.other()),
            Outcome::WonBy(winner) if winner == self.human_mark => RoundStatus::HumanWon,
            Outcome::WonBy(_) => RoundStatus::ComputerWon,
            Outcome::Tie => RoundStatus::Tie,
        };
        debug!(?side, %mark, position = pos.to_index(), %outcome, "Move applied");

        self.notify(RoundEvent::MovePlayed {
            side,
            mark,
            position: pos,
            outcome,
        });

        if self.status.is_over() {
            self.scoreboard.record(self.status);
            info!(status = ?self.status, round = self.round, "Round over");
            self.notify(RoundEvent::RoundOver {
                status: self.status,
            });
        }

        Ok(self.status)
    }

    fn notify(&mut self, event: RoundEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
