//! Strictly Solo - tic-tac-toe against an optimal computer opponent.
//!
//! This crate is the presentation side of the game. The rules and the
//! minimax engine live in [`strictly_minimax`]; everything here drives them.
//!
//! # Architecture
//!
//! - **Session**: round lifecycle, turn order, and the scoreboard
//! - **Notify**: observers for round events (sound cues, UI updates, logs)
//! - **Opponent**: the engine wrapped with a simulated thinking delay
//! - **Config**: TOML settings with defaults
//! - **Tui**: the interactive terminal front-end
//!
//! # Example
//!
//! ```
//! use strictly_solo::{RoundStatus, Session, SoloConfig};
//! use strictly_minimax::Position;
//!
//! let mut session = Session::new(&SoloConfig::default());
//! session.play_human(Position::Center)?;
//! let reply = session.play_computer()?;
//! assert!(reply != Position::Center);
//! assert_eq!(session.status(), RoundStatus::HumanTurn);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod notify;
mod opponent;
mod scoreboard;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, FirstPlayer, SoloConfig};

// Crate-level exports - Session lifecycle
pub use scoreboard::Scoreboard;
pub use session::{MoveError, RoundStatus, Session, Side};

// Crate-level exports - Observers
pub use notify::{Cue, Observer, RoundEvent, SoundCues, TracingObserver};

// Crate-level exports - Computer opponent
pub use opponent::{ComputerOpponent, ThinkingDelay};

// Crate-level exports - Non-interactive commands
pub use commands::{
    EvaluationReport, MoveReport, SelfplayReport, best_move_report, evaluation_report, selfplay,
};
