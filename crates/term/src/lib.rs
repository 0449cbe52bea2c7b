//! Console "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for line-based console play.
//! It renders into a plain text frame that is flushed to any `Write` sink,
//! so tests can capture exactly what a player would see.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: state in, frame out
//! - Never let the player overlay touch board state

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use expedition_core as core;
pub use expedition_types as types;

pub use frame::TextFrame;
pub use game_view::GameView;
pub use renderer::{encode_frame_into, TerminalRenderer};
