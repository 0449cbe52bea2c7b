//! GameView: maps `core::GameState` into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::frame::TextFrame;
use crate::types::{Position, BOARD_SIZE, COMMANDS_HELP, LEGEND, PLAYER_GLYPH, SEPARATOR, TITLE};

/// Header, separators, grid rows, legend and command line.
const FRAME_LINES: usize = 3 + BOARD_SIZE as usize + 3;

/// A lightweight console view for the expedition.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into a fresh frame.
    pub fn render(&self, state: &GameState) -> TextFrame {
        let mut frame = TextFrame::with_capacity(FRAME_LINES);
        self.render_into(state, &mut frame);
        frame
    }

    /// Render into an existing frame, replacing its contents.
    pub fn render_into(&self, state: &GameState, frame: &mut TextFrame) {
        frame.clear();
        frame.push_line(TITLE);
        frame.push_line(format!(
            "Health: {} | Moves: {}",
            state.health(),
            state.moves()
        ));
        frame.push_line(SEPARATOR);
        for row in 0..BOARD_SIZE as i8 {
            frame.push_line(self.render_row(state, row));
        }
        frame.push_line(SEPARATOR);
        frame.push_line(LEGEND);
        frame.push_line(COMMANDS_HELP);
    }

    /// One grid row, three characters per cell.
    ///
    /// The player's glyph is drawn over whatever the cell holds; the board itself is untouched.
    pub fn render_row(&self, state: &GameState, row: i8) -> String {
        let mut line = String::with_capacity(3 * BOARD_SIZE as usize);
        for col in 0..BOARD_SIZE as i8 {
            let pos = Position::new(row, col);
            let glyph = if pos == state.position() {
                PLAYER_GLYPH
            } else {
                state.board().get(pos).unwrap_or_default().glyph()
            };
            line.push(' ');
            line.push(glyph);
            line.push(' ');
        }
        line
    }
}
