//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the expedition rules and state management.
//! It has **zero dependencies** on terminal output or input parsing, making it:
//!
//! - **Deterministic**: Board generation draws from an injected [`RandomSource`]
//! - **Testable**: Fixed layouts can be built with [`Board::from_rows`]
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 grid of cell markers
//! - [`game_state`]: Player, exit, move resolution and game-over evaluation
//! - [`rng`]: Injectable random sources for board generation
//!
//! # Game Rules
//!
//! - Each step that stays on the map costs 1 move; steps into the edge are free and rejected
//! - **Resource**: +5 moves, consumed on contact
//! - **Hazard**: -10 health, consumed on contact
//! - **Exit**: reaching it wins, unless health or moves ran out on the same step
//!
//! # Example
//!
//! ```
//! use expedition_core::{GameRng, GameState};
//! use expedition_core::types::{Direction, GameStatus};
//!
//! let mut rng = GameRng::new(12345);
//! let mut game = GameState::generate(&mut rng).unwrap();
//!
//! // A fresh board is never already over.
//! assert_eq!(game.check_game_over(), GameStatus::Ongoing);
//!
//! let outcome = game.apply_move(Direction::Right);
//! println!("{}", outcome.message());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;

pub use expedition_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Player};
pub use rng::{GameRng, RandomSource, ScriptedRng};
