//! Strictly Solo - Unified CLI
//!
//! Interactive play plus a few commands for querying the engine directly.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::Board;
use strictly_solo::{FirstPlayer, SoloConfig, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        computer_first: false,
        no_delay: false,
    }) {
        Command::Play {
            config,
            computer_first,
            no_delay,
        } => run_play(config, computer_first, no_delay).await,
        Command::BestMove {
            board,
            computer,
            json,
        } => {
            init_stderr_logging();
            run_best_move(&board, computer, json)
        }
        Command::Evaluate { board, json } => {
            init_stderr_logging();
            run_evaluate(&board, json)
        }
        Command::Selfplay {
            computer_first,
            json,
        } => {
            init_stderr_logging();
            run_selfplay(computer_first, json)
        }
    }
}

/// Logging for one-shot commands; stdout stays clean for their output.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the terminal UI
async fn run_play(
    config: Option<std::path::PathBuf>,
    computer_first: bool,
    no_delay: bool,
) -> Result<()> {
    let mut settings = SoloConfig::load(config.as_deref())?;
    if computer_first {
        settings = settings.with_first_player(FirstPlayer::Computer);
    }
    if no_delay {
        settings = settings.without_delay();
    }
    tui::run_tui(settings).await
}

#[instrument(skip(board))]
fn run_best_move(board: &Board, computer: strictly_minimax::Mark, json: bool) -> Result<()> {
    let report = strictly_solo::best_move_report(board, computer)?;
    info!(index = report.index, "Best move computed");
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.index);
    }
    Ok(())
}

#[instrument(skip(board))]
fn run_evaluate(board: &Board, json: bool) -> Result<()> {
    let report = strictly_solo::evaluation_report(board);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.outcome);
    }
    Ok(())
}

#[instrument]
fn run_selfplay(computer_first: bool, json: bool) -> Result<()> {
    let first = if computer_first {
        FirstPlayer::Computer
    } else {
        FirstPlayer::Human
    };
    let report = strictly_solo::selfplay(*SoloConfig::default().human_mark(), first)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (side, index) in &report.moves {
        println!("{:>8} -> {}", side.to_string(), index + 1);
    }
    println!("\n{}\n", report.board);
    println!("{}", report.status.message());
    Ok(())
}
