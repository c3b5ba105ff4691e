//! Terminal front end for time-travel tic-tac-toe.
//!
//! Renders [`tictactoe_core::GameView`] snapshots with ratatui and turns key
//! presses into [`tictactoe_core::UiEvent`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Command, Focus, command_for, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Installs file-based tracing so log output does not corrupt the screen.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, whether the game loop ends
/// normally or with an error.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, config));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw-then-read loop; each key press is handled to completion before the
/// next one is read.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TuiConfig,
) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|f| draw(f, &app, config))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    Ok(())
}
