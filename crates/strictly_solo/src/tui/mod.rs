//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::{App, ComputerMove, TurnRequest};
pub use ui::draw;

use crate::config::SoloConfig;
use crate::opponent::ComputerOpponent;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
pub async fn run_tui(config: SoloConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Solo TUI");

    enable_raw_mode()?;
    let mut terminal = enter_terminal(io::stdout)?;

    let res = run_app(&mut terminal, &config).await;

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Switches to the alternate screen and builds the terminal.
///
/// Raw mode must already be on. If any step fails the screen is restored
/// through a fresh writer from `open` before the error is returned.
fn enter_terminal<W: Write>(mut open: impl FnMut() -> W) -> Result<Terminal<CrosstermBackend<W>>> {
    let entered = (|| -> Result<Terminal<CrosstermBackend<W>>> {
        let mut out = open();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(out))?)
    })();

    if let Err(err) = &entered {
        error!(error = %err, "Terminal setup failed");
        if let Err(restore) = restore_terminal(&mut open()) {
            error!(error = %restore, "Failed to restore terminal");
        }
    }
    entered
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Event loop: draw, dispatch computer turns, read keys.
#[instrument(skip_all)]
async fn run_app(terminal: &mut Term, config: &SoloConfig) -> Result<()> {
    let mut app = App::new(config);
    let opponent = ComputerOpponent::from_config(config);
    let (move_tx, mut move_rx) = mpsc::unbounded_channel::<ComputerMove>();

    loop {
        app.drain_events();
        terminal.draw(|f| draw(f, &app))?;

        if app.should_quit() {
            return Ok(());
        }

        if let Some(request) = app.take_computer_turn() {
            let tx = move_tx.clone();
            tokio::spawn(async move {
                let result = opponent.choose(request.board).await;
                let _ = tx.send(ComputerMove {
                    round: request.round,
                    result,
                });
            });
        }

        while let Ok(mv) = move_rx.try_recv() {
            app.on_computer_move(mv);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
}
