//! Round events and the observers that react to them.
//!
//! The session never plays sounds or shows messages itself. It publishes a
//! [`RoundEvent`] after every state change and each registered [`Observer`]
//! decides what to do with it.

use crate::session::{RoundStatus, Side};
use serde::{Deserialize, Serialize};
use strictly_minimax::{Mark, Outcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Something that happened in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A fresh board is ready.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A mark was placed.
    MovePlayed {
        /// Side that moved.
        side: Side,
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
        /// Board outcome right after the move.
        outcome: Outcome,
    },
    /// The round reached a terminal status. Sent once per round.
    RoundOver {
        /// Final status.
        status: RoundStatus,
    },
    /// All tallies were zeroed.
    ScoresReset,
}

/// Receives session events.
pub trait Observer: Send {
    /// Called synchronously after the session state changed.
    fn on_event(&mut self, event: &RoundEvent);
}

/// Forwards events to an async consumer such as the UI loop.
impl Observer for mpsc::UnboundedSender<RoundEvent> {
    fn on_event(&mut self, event: &RoundEvent) {
        if self.send(event.clone()).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Logs every event at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&mut self, event: &RoundEvent) {
        info!(?event, "Round event");
    }
}

/// Sound cue for a round event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Cue {
    /// A mark was placed.
    #[strum(to_string = "click")]
    Move,
    /// The human won.
    #[strum(to_string = "victory")]
    Win,
    /// The computer won.
    #[strum(to_string = "defeat")]
    Lose,
    /// The round was tied.
    #[strum(to_string = "tie game")]
    Tie,
}

impl Cue {
    /// Cue matching an event, if the event has one.
    pub fn for_event(event: &RoundEvent) -> Option<Cue> {
        match event {
            RoundEvent::MovePlayed { .. } => Some(Cue::Move),
            RoundEvent::RoundOver { status } => match status {
                RoundStatus::HumanWon => Some(Cue::Win),
                RoundStatus::ComputerWon => Some(Cue::Lose),
                RoundStatus::Tie => Some(Cue::Tie),
                RoundStatus::HumanTurn | RoundStatus::ComputerTurn => None,
            },
            RoundEvent::RoundStarted { .. } | RoundEvent::ScoresReset => None,
        }
    }
}

/// Sound effects stub: logs the cue that would be played.
#[derive(Debug, Clone, Default)]
pub struct SoundCues {
    enabled: bool,
    last: Option<Cue>,
}

impl SoundCues {
    /// Creates the cue player.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
        }
    }

    /// Whether cues are audible.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flips sound on or off and returns the new state.
    #[instrument(skip(self), fields(was = self.enabled))]
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Last cue actually played.
    pub fn last(&self) -> Option<Cue> {
        self.last
    }
}

impl Observer for SoundCues {
    fn on_event(&mut self, event: &RoundEvent) {
        if !self.enabled {
            return;
        }
        if let Some(cue) = Cue::for_event(event) {
            info!(%cue, "Playing sound");
            self.last = Some(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_event() -> RoundEvent {
        RoundEvent::MovePlayed {
            side: Side::Human,
            mark: Mark::X,
            position: Position::Center,
            outcome: Outcome::InProgress,
        }
    }

    #[test]
    fn test_cue_mapping() {
        assert_eq!(Cue::for_event(&move_event()), Some(Cue::Move));
        assert_eq!(
            Cue::for_event(&RoundEvent::RoundOver {
                status: RoundStatus::ComputerWon
            }),
            Some(Cue::Lose)
        );
        assert_eq!(Cue::for_event(&RoundEvent::ScoresReset), None);
    }

    #[test]
    fn test_muted_cues_play_nothing() {
        let mut cues = SoundCues::new(false);
        cues.on_event(&move_event());
        assert_eq!(cues.last(), None);

        assert!(cues.toggle());
        cues.on_event(&RoundEvent::RoundOver {
            status: RoundStatus::Tie,
        });
        assert_eq!(cues.last(), Some(Cue::Tie));
    }

    #[test]
    fn test_channel_observer_forwards() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        tx.on_event(&RoundEvent::ScoresReset);
        assert_eq!(rx.try_recv().unwrap(), RoundEvent::ScoresReset);
    }

    #[test]
    fn test_channel_observer_survives_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel::<RoundEvent>();
        drop(rx);
        tx.on_event(&RoundEvent::ScoresReset);
    }
}
