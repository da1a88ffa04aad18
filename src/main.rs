//! Terminal flight runner (default binary).
//!
//! Reads config from the environment, enters the alternate screen and runs
//! the fixed-tick loop until the player quits.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_flight::app::{run_loop, LoopOptions};
use tui_flight::config::FlightConfig;
use tui_flight::core::FlightGame;
use tui_flight::input::CrosstermInput;
use tui_flight::store::JsonFileStore;
use tui_flight::term::{FrameBuffer, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let config = FlightConfig::from_env();
    if let Some(path) = &config.log_path {
        init_tracing(path)?;
    }
    info!(seed = config.seed, high_score_path = %config.high_score_path.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &FlightConfig) -> Result<()> {
    // The play field is sized once; later resizes only change the viewport.
    let field = TerminalRenderer::viewport();
    let store = JsonFileStore::new(&config.high_score_path);
    let mut game = FlightGame::new(field.width, field.height, config.seed, Box::new(store));

    let view = GameView::default();
    let mut input = CrosstermInput::new();
    let mut fb = FrameBuffer::new(field.width, field.height);

    let exit = run_loop(&mut game, &mut input, LoopOptions::default(), |snap| {
        view.render_into(snap, TerminalRenderer::viewport(), &mut fb);
        term.present(&mut fb)
    })?;

    info!(?exit, score = game.score(), ticks = game.tick(), "finished");
    Ok(())
}

/// Logs go to a file; the terminal belongs to the game.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}
