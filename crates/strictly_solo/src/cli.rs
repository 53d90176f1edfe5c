//! Command-line interface for strictly_solo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Board, Mark};

/// Strictly Solo - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_solo")]
#[command(about = "Play tic-tac-toe against an optimal computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to ./strictly_solo.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the computer open every round
        #[arg(long)]
        computer_first: bool,

        /// Skip the simulated thinking delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Board as nine squares: X, O, and . for empty (e.g. "XX..O....")
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(long, default_value = "O")]
        computer: Mark,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Evaluate {
        /// Board as nine squares: X, O, and . for empty
        #[arg(short, long)]
        board: Board,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides of one round
    Selfplay {
        /// Let the computer side open the round
        #[arg(long)]
        computer_first: bool,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
