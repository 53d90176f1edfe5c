//! Application state and logic.

use super::input::{digit_position, move_cursor};
use crate::config::SoloConfig;
use crate::notify::{Observer, RoundEvent, SoundCues};
use crate::session::{RoundStatus, Session};
use crossterm::event::KeyCode;
use strictly_minimax::{Board, Position};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Board handed to the computer, tagged with the round it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRequest {
    /// Round the move is for.
    pub round: u32,
    /// Board to search.
    pub board: Board,
}

/// Result of a computer search delivered back to the UI loop.
#[derive(Debug)]
pub struct ComputerMove {
    /// Round the move was requested for.
    pub round: u32,
    /// Chosen square, or why the search failed.
    pub result: anyhow::Result<Position>,
}

/// Main application state.
pub struct App {
    session: Session,
    events: mpsc::UnboundedReceiver<RoundEvent>,
    sound: SoundCues,
    cursor: Position,
    pending_round: Option<u32>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh session.
    pub fn new(config: &SoloConfig) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        let session = Session::new(config).with_observer(event_tx);
        Self {
            session,
            events,
            sound: SoundCues::new(*config.sound_enabled()),
            cursor: Position::Center,
            pending_round: None,
            notice: None,
            should_quit: false,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether a computer move is outstanding.
    pub fn is_thinking(&self) -> bool {
        self.pending_round.is_some()
    }

    /// Whether sound cues are on.
    pub fn sound_enabled(&self) -> bool {
        self.sound.enabled()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One-line status shown under the scoreboard.
    pub fn status_line(&self) -> String {
        let status = self.session.status();
        if self.is_thinking() {
            "Computer is thinking...".to_string()
        } else if status.is_over() {
            format!("{} Press 'n' for a new round.", status.message())
        } else {
            status.message().to_string()
        }
    }

    /// Transient message from the last action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Feeds pending session events to the sound cues.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling round event");
            self.sound.on_event(&event);
        }
    }

    /// Claims the computer's turn if one is due and not yet requested.
    pub fn take_computer_turn(&mut self) -> Option<TurnRequest> {
        if self.session.status() != RoundStatus::ComputerTurn || self.is_thinking() {
            return None;
        }
        let round = self.session.round();
        self.pending_round = Some(round);
        Some(TurnRequest {
            round,
            board: *self.session.board(),
        })
    }

    /// Applies a finished computer search, discarding moves for old rounds.
    pub fn on_computer_move(&mut self, mv: ComputerMove) {
        if self.pending_round != Some(mv.round) || mv.round != self.session.round() {
            debug!(round = mv.round, current = self.session.round(), "Discarding stale computer move");
            return;
        }
        self.pending_round = None;

        match mv.result {
            Ok(pos) => {
                if let Err(e) = self.session.apply_computer(pos) {
                    warn!(error = %e, "Computer move rejected");
                    self.notice = Some(format!("Computer move rejected: {}", e));
                }
            }
            Err(e) => {
                error!(error = %e, "Computer search failed");
                self.notice = Some(format!("Computer failed to move: {}", e));
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.new_round(),
            KeyCode::Char('r') => {
                self.session.reset_scores();
                self.after_restart();
                self.notice = Some("Scores reset".to_string());
            }
            KeyCode::Char('s') => {
                let on = self.sound.toggle();
                self.notice = Some(if on { "Sound on" } else { "Sound off" }.to_string());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    /// Starts a new round, abandoning any pending computer move.
    pub fn new_round(&mut self) {
        self.session.new_round();
        self.after_restart();
    }

    fn after_restart(&mut self) {
        self.pending_round = None;
        self.notice = None;
        self.cursor = Position::Center;
    }

    fn play(&mut self, pos: Position) {
        if self.is_thinking() || self.session.status().is_over() {
            debug!(?pos, "Ignoring input while not the human's turn");
            return;
        }
        match self.session.play_human(pos) {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }
}
