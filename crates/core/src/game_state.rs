//! Game state module - manages the complete expedition state
//!
//! This module ties together the board, the player and the exit. It handles
//! board generation, move resolution and game-over evaluation.

use anyhow::{bail, Result};
use log::{debug, warn};

use crate::board::Board;
use crate::rng::RandomSource;
use crate::types::*;

/// The explorer: where they stand and what they have left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub health: i32,
    pub moves: i32,
}

impl Player {
    /// A fresh player at `position` with full health and move budget
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: INITIAL_HEALTH,
            moves: INITIAL_MOVES,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    player: Player,
    exit: Position,
}

impl GameState {
    /// Generate a new random expedition.
    ///
    /// The player's start cell is drawn first (row, then column), then the exit,
    /// the resources and the hazards are placed by rejection sampling on cells
    /// that are empty and not the start cell.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let start = random_position(rng);
        let mut board = Board::new();

        let exit = place(&mut board, start, CellKind::Exit, rng)?;
        for _ in 0..NUM_RESOURCES {
            place(&mut board, start, CellKind::Resource, rng)?;
        }
        for _ in 0..NUM_HAZARDS {
            place(&mut board, start, CellKind::Hazard, rng)?;
        }

        debug!(
            "generated board: start=({}, {}) exit=({}, {})",
            start.row, start.col, exit.row, exit.col
        );

        Ok(Self {
            board,
            player: Player::new(start),
            exit,
        })
    }

    /// Assemble a state from a fixed layout.
    ///
    /// The exit cell is marked on the board if it is not already. Any other
    /// exit marker on the board is an error.
    pub fn from_parts(mut board: Board, player: Player, exit: Position) -> Result<Self> {
        if !player.position.in_bounds() {
            bail!(
                "player position ({}, {}) is off the board",
                player.position.row,
                player.position.col
            );
        }
        if !exit.in_bounds() {
            bail!("exit position ({}, {}) is off the board", exit.row, exit.col);
        }
        if player.position == exit {
            bail!("player cannot start on the exit");
        }
        if let Some(stray) = board
            .positions_of(CellKind::Exit)
            .into_iter()
            .find(|&pos| pos != exit)
        {
            bail!(
                "board has a second exit at ({}, {}); expected only ({}, {})",
                stray.row,
                stray.col,
                exit.row,
                exit.col
            );
        }
        board.set(exit, CellKind::Exit);
        Ok(Self {
            board,
            player,
            exit,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn position(&self) -> Position {
        self.player.position
    }

    pub fn health(&self) -> i32 {
        self.player.health
    }

    pub fn moves(&self) -> i32 {
        self.player.moves
    }

    /// Move the player one step and apply the destination's effect.
    ///
    /// Off-board steps are rejected before any move is charged.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let target = self.player.position.offset(dir);
        if self.board.is_out_of_bounds(target) {
            debug!("move {} blocked at edge", dir.as_str());
            return MoveOutcome::Blocked;
        }

        self.player.moves -= MOVE_COST;

        let cell = self.board.get(target).unwrap_or_default();
        self.player.position = target;

        let outcome = match cell {
            CellKind::Resource => {
                self.player.moves += RESOURCE_MOVE_BONUS;
                self.board.take(target);
                MoveOutcome::ResourceFound
            }
            CellKind::Hazard => {
                self.player.health -= HAZARD_DAMAGE;
                self.board.take(target);
                MoveOutcome::HazardHit
            }
            CellKind::Exit => MoveOutcome::ExitReached,
            CellKind::Empty => MoveOutcome::PlainMove,
        };

        debug!(
            "move {} -> ({}, {}): {} (health={} moves={})",
            dir.as_str(),
            target.row,
            target.col,
            outcome.as_str(),
            self.player.health,
            self.player.moves
        );
        outcome
    }

    /// Evaluate the end conditions.
    ///
    /// Health is checked before moves, and both before the exit, so a step that
    /// reaches the exit with nothing left still loses.
    pub fn check_game_over(&self) -> GameStatus {
        if self.player.health <= 0 {
            return GameStatus::OutOfHealth;
        }
        if self.player.moves <= 0 {
            return GameStatus::OutOfMoves;
        }
        if self.player.position == self.exit {
            return GameStatus::Escaped;
        }
        GameStatus::Ongoing
    }
}

fn random_position<R: RandomSource + ?Sized>(rng: &mut R) -> Position {
    let size = BOARD_SIZE as usize;
    let row = rng.next_index(size) as i8;
    let col = rng.next_index(size) as i8;
    Position::new(row, col)
}

/// Rejection-sample an empty cell other than `avoid` and mark it with `kind`
fn place<R: RandomSource + ?Sized>(
    board: &mut Board,
    avoid: Position,
    kind: CellKind,
    rng: &mut R,
) -> Result<Position> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = random_position(rng);
        if board.is_empty(pos) && pos != avoid {
            board.set(pos, kind);
            return Ok(pos);
        }
    }
    warn!(
        "no free cell for {} after {} draws",
        kind.as_str(),
        MAX_PLACEMENT_ATTEMPTS
    );
    bail!(
        "could not place {} after {} attempts",
        kind.as_str(),
        MAX_PLACEMENT_ATTEMPTS
    )
}
