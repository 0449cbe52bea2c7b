//! Expedition (workspace facade crate).
//!
//! This package exposes the `expedition::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`, and adds
//! the [`session`] turn loop that wires them together.

pub use expedition_core as core;
pub use expedition_input as input;
pub use expedition_term as term;
pub use expedition_types as types;

pub mod session;

pub use session::{Session, SessionEnd};
