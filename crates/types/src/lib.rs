//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input parsing).
//!
//! # Board Dimensions
//!
//! The expedition map is a square grid:
//!
//! - **Size**: 10x10 cells (rows and columns indexed 0-9)
//! - **Coordinates**: `(row, col)`, row 0 is the top line, col 0 the left column
//!
//! # Game Balance Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_HEALTH` | 100 | Health at the start of an expedition |
//! | `INITIAL_MOVES` | 50 | Move budget at the start of an expedition |
//! | `NUM_RESOURCES` | 8 | Resources scattered on the map |
//! | `NUM_HAZARDS` | 8 | Hazards scattered on the map |
//! | `RESOURCE_MOVE_BONUS` | 5 | Moves granted by a resource |
//! | `HAZARD_DAMAGE` | 10 | Health lost to a hazard |
//! | `MOVE_COST` | 1 | Moves spent per step that stays on the map |
//! | `MAX_PLACEMENT_ATTEMPTS` | 4096 | Rejection-sampling draws allowed per placed item |
//!
//! # Examples
//!
//! ```
//! use expedition_types::{CellKind, Command, Direction, Position, BOARD_SIZE};
//!
//! // Parse a command (case-insensitive)
//! assert_eq!(Command::from_str("W"), Some(Command::Move(Direction::Up)));
//! assert_eq!(Command::from_str("q"), Some(Command::Quit));
//!
//! // Step a position
//! let pos = Position::new(2, 3).offset(Direction::Right);
//! assert_eq!(pos, Position::new(2, 4));
//!
//! // Glyphs
//! assert_eq!(CellKind::Hazard.glyph(), 'H');
//! assert_eq!(BOARD_SIZE, 10);
//! ```

/// Board side length in cells (10x10)
pub const BOARD_SIZE: u8 = 10;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Starting health
pub const INITIAL_HEALTH: i32 = 100;

/// Starting move budget
pub const INITIAL_MOVES: i32 = 50;

/// Number of resources placed at initialization
pub const NUM_RESOURCES: usize = 8;

/// Number of hazards placed at initialization
pub const NUM_HAZARDS: usize = 8;

/// Moves granted when a resource is collected
pub const RESOURCE_MOVE_BONUS: i32 = 5;

/// Health lost when stepping on a hazard
pub const HAZARD_DAMAGE: i32 = 10;

/// Moves charged for every step that passes the bounds check
pub const MOVE_COST: i32 = 1;

/// Upper bound on rejection-sampling draws for a single item placement.
///
/// With 17 occupied cells out of 100 a draw is accepted with probability > 0.8,
/// so this cap is only reached when the board is resized without widening capacity.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 4096;

/// Glyph drawn over the cell the player stands on
pub const PLAYER_GLYPH: char = 'X';

/// Title line printed above the board
pub const TITLE: &str = "--- Expedition to an Alien Planet ---";

/// Separator printed around the grid
pub const SEPARATOR: &str = "---------------------------------";

/// Legend line printed below the grid
pub const LEGEND: &str = "Legend: X=You, R=Resource (+5 Moves), H=Hazard (-10 Health), E=Exit";

/// Command summary printed below the legend
pub const COMMANDS_HELP: &str = "Commands: w (up), s (down), a (left), d (right), q (quit)";

/// Prompt printed before each blocking read
pub const PROMPT: &str = "Enter your move (w/s/a/d/q): ";

/// Message for input that is not a known command
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command. Use w, s, a, d or q.";

/// Farewell printed on the quit command
pub const QUIT_MESSAGE: &str = "Exiting game. Goodbye!";


/// Marker stored in a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Resource,
    Hazard,
    Exit,
}

impl CellKind {
    /// Character used when the cell is drawn
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_types::CellKind;
    ///
    /// assert_eq!(CellKind::Empty.glyph(), ' ');
    /// assert_eq!(CellKind::Resource.glyph(), 'R');
    /// assert_eq!(CellKind::Exit.glyph(), 'E');
    /// ```
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Resource => 'R',
            CellKind::Hazard => 'H',
            CellKind::Exit => 'E',
        }
    }

    /// Parse from a glyph (the inverse of [`CellKind::glyph`])
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            ' ' | '.' => Some(CellKind::Empty),
            'R' => Some(CellKind::Resource),
            'H' => Some(CellKind::Hazard),
            'E' => Some(CellKind::Exit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Resource => "resource",
            CellKind::Hazard => "hazard",
            CellKind::Exit => "exit",
        }
    }
}

/// A (row, col) coordinate on the board.
///
/// Signed so that a candidate position one step off the edge is representable
/// and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in `dir`, which may lie off the board
    pub fn offset(&self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// Check whether the position lies inside the board
    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }
}

/// The four unit moves (no diagonals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row delta, col delta)`
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A recognized player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Parse a command from one line of input.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str(" w "), Some(Command::Move(Direction::Up)));
    /// assert_eq!(Command::from_str("S"), Some(Command::Move(Direction::Down)));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" => Some(Command::Move(Direction::Up)),
            "s" => Some(Command::Move(Direction::Down)),
            "a" => Some(Command::Move(Direction::Left)),
            "d" => Some(Command::Move(Direction::Right)),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }

}

/// Result of resolving one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Destination is off the map; nothing changed
    Blocked,
    ResourceFound,
    HazardHit,
    ExitReached,
    PlainMove,
}

impl MoveOutcome {
    /// Human-readable outcome line
    pub fn message(&self) -> &'static str {
        match self {
            MoveOutcome::Blocked => "Blocked! You cannot leave the map.",
            MoveOutcome::ResourceFound => "You found a resource! +5 Moves.",
            MoveOutcome::HazardHit => "Oh no! A hazard! -10 Health.",
            MoveOutcome::ExitReached => "You found the exit!",
            MoveOutcome::PlainMove => "Moved into empty space.",
        }
    }

    /// Short category name (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Blocked => "blocked",
            MoveOutcome::ResourceFound => "resource",
            MoveOutcome::HazardHit => "hazard",
            MoveOutcome::ExitReached => "exit",
            MoveOutcome::PlainMove => "move",
        }
    }
}

/// Game-over evaluation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    OutOfHealth,
    OutOfMoves,
    Escaped,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn is_win(&self) -> bool {
        matches!(self, GameStatus::Escaped)
    }

    /// Message printed when the game ends (empty while ongoing)
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::Ongoing => "",
            GameStatus::OutOfHealth => "Game over! You ran out of health.",
            GameStatus::OutOfMoves => "Game over! You ran out of moves.",
            GameStatus::Escaped => {
                "Congratulations! You found the exit and escaped the alien planet!"
            }
        }
    }
}
