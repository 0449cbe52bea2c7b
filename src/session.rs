//! Turn loop: render, check for game over, read a line, resolve it.
//!
//! The loop is generic over its input and output so it can be driven from
//! in-memory buffers as easily as from a console.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::core::GameState;
use crate::input::{InputEvent, LineReader};
use crate::term::{GameView, TerminalRenderer, TextFrame};
use crate::types::{Command, GameStatus, INVALID_COMMAND_MESSAGE, PROMPT, QUIT_MESSAGE};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A game-over condition was reached
    Finished(GameStatus),
    /// The player typed the quit command
    Quit,
    /// Input ran out before the game ended
    InputClosed,
}

pub struct Session<R, W: Write> {
    state: GameState,
    input: LineReader<R>,
    renderer: TerminalRenderer<W>,
    view: GameView,
    frame: TextFrame,
    turns: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: GameState, input: LineReader<R>, renderer: TerminalRenderer<W>) -> Self {
        Self {
            state,
            input,
            renderer,
            view: GameView::new(),
            frame: TextFrame::new(),
            turns: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of lines consumed so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Play until the game ends, the player quits, or input runs out.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            if let Some(end) = self.step()? {
                info!("session ended after {} turns: {:?}", self.turns, end);
                return Ok(end);
            }
        }
    }

    /// Play a single turn. Returns `Some` once the session is over.
    pub fn step(&mut self) -> Result<Option<SessionEnd>> {
        self.view.render_into(&self.state, &mut self.frame);
        self.renderer.draw(&self.frame)?;

        let status = self.state.check_game_over();
        if status.is_terminal() {
            self.renderer.line(status.message())?;
            return Ok(Some(SessionEnd::Finished(status)));
        }

        self.renderer.prompt(PROMPT)?;
        let event = self.input.read_event();
        self.turns += 1;

        match event {
            InputEvent::Closed => {
                // Terminate the dangling prompt line.
                self.renderer.line("")?;
                return Ok(Some(SessionEnd::InputClosed));
            }
            InputEvent::Command(Command::Quit) => {
                self.renderer.line(QUIT_MESSAGE)?;
                return Ok(Some(SessionEnd::Quit));
            }
            InputEvent::Command(Command::Move(dir)) => {
                let outcome = self.state.apply_move(dir);
                self.renderer.message(outcome.message())?;
            }
            InputEvent::Unrecognized(text) => {
                debug!("unrecognized input {:?}", text);
                self.renderer.message(INVALID_COMMAND_MESSAGE)?;
            }
        }

        Ok(None)
    }
}
