use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::terminal;
use tracing::info;

use lifeview::app;
use lifeview::config::Cli;
use lifeview::game::Game;
use lifeview::logging;
use lifeview::render;
use lifeview::terminal::CrosstermDisplay;
use lifeview::terminal::CrosstermInput;
use lifeview::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let grid = cli.grid()?;

    // Get the width and height of the terminal
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;

    let mut game = Game::new(grid, render::display_size(cols, rows), cli.cadence());
    if cli.play {
        game.set_playing(true, Instant::now());
    }

    info!(
        width = game.grid().width(),
        height = game.grid().height(),
        cols,
        rows,
        "starting"
    );

    let _guard = TerminalGuard::new().context("Failed to set up the terminal")?;

    app::run(
        &mut game,
        &mut CrosstermInput,
        &mut CrosstermDisplay::new(),
        &cli.glyphs(),
    )
}
