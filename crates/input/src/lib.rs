//! Console input module (engine-facing).
//!
//! This module is intentionally independent of any terminal backend. It maps
//! raw text lines into [`crate::types::Command`] values and provides a
//! [`LineReader`] that turns any `BufRead` into a stream of input events,
//! absorbing read failures instead of surfacing them to the turn loop.

pub mod map;
pub mod reader;

pub use expedition_types as types;

pub use map::{parse_line, should_quit};
pub use reader::{InputEvent, LineReader, MAX_READ_FAILURES};
