//! Console expedition runner (default binary).
//!
//! Reads one command per line from stdin and prints the board to stdout.
//! Diagnostics go to stderr through `env_logger` (set `RUST_LOG=debug`).

use std::io;

use anyhow::Result;
use log::info;

use expedition::core::{GameRng, GameState};
use expedition::input::LineReader;
use expedition::term::TerminalRenderer;
use expedition::Session;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = GameRng::from_time();
    info!("board seed {}", rng.seed());
    let state = GameState::generate(&mut rng)?;

    let stdin = io::stdin();
    let mut session = Session::new(
        state,
        LineReader::new(stdin.lock()),
        TerminalRenderer::stdout(),
    );
    session.run()?;
    Ok(())
}
