//! Board module - manages the expedition grid
//!
//! The board is a 10x10 grid where each cell holds one [`CellKind`] marker.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: `(row, col)` where row ranges 0..9 (top to bottom), col ranges 0..9 (left to right)

use anyhow::{bail, Result};

use crate::types::{CellKind, Position, BOARD_SIZE, CELL_COUNT};

/// The expedition map - 10 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [CellKind; CELL_COUNT],
}

impl Board {
    /// Create a new board with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [CellKind::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.row as usize) * (BOARD_SIZE as usize) + (pos.col as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get the marker at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set the marker at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, kind: CellKind) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        !pos.in_bounds()
    }

    /// Check if position is inside the board and holds no special marker
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Empty))
    }

    /// Replace the marker at `pos` with Empty, returning what was there
    pub fn take(&mut self, pos: Position) -> Option<CellKind> {
        let idx = Self::index(pos)?;
        Some(std::mem::take(&mut self.cells[idx]))
    }

    /// Count cells holding `kind`
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate over every `(position, marker)` pair in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let size = BOARD_SIZE as usize;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            (Position::new((i / size) as i8, (i % size) as i8), kind)
        })
    }

    /// Positions of every cell holding `kind`
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.iter()
            .filter(|&(_, k)| k == kind)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Empty);
    }

    /// Build a board from one string per row, using the render glyphs
    /// (`' '` or `'.'` for empty, `R`, `H`, `E`).
    ///
    /// Handy for laying out fixed scenarios:
    ///
    /// ```
    /// use expedition_core::Board;
    /// use expedition_core::types::{CellKind, Position};
    ///
    /// let board = Board::from_rows(&[
    ///     "..........",
    ///     "..........",
    ///     "....H.....",
    ///     "..........",
    ///     "..........",
    ///     "..........",
    ///     "..........",
    ///     "..........",
    ///     "..........",
    ///     ".........E",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(Position::new(2, 4)), Some(CellKind::Hazard));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != BOARD_SIZE as usize {
            bail!("expected {} rows, got {}", BOARD_SIZE, rows.len());
        }

        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().collect();
            if glyphs.len() != BOARD_SIZE as usize {
                bail!(
                    "row {} has {} cells, expected {}",
                    row,
                    glyphs.len(),
                    BOARD_SIZE
                );
            }
            for (col, ch) in glyphs.into_iter().enumerate() {
                let Some(kind) = CellKind::from_glyph(ch) else {
                    bail!("unknown glyph {:?} at ({}, {})", ch, row, col);
                };
                board.set(Position::new(row as i8, col as i8), kind);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(Position::new(0, 0)), Some(0));
        assert_eq!(Board::index(Position::new(0, 9)), Some(9));
        assert_eq!(Board::index(Position::new(1, 0)), Some(10));
        assert_eq!(Board::index(Position::new(9, 9)), Some(99));
        assert_eq!(Board::index(Position::new(-1, 0)), None);
        assert_eq!(Board::index(Position::new(0, 10)), None);
        assert_eq!(Board::index(Position::new(10, 0)), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(Position::new(0, 0), CellKind::Resource);
        board.set(Position::new(5, 7), CellKind::Hazard);

        assert_eq!(board.get(Position::new(0, 0)), Some(CellKind::Resource));
        assert_eq!(board.get(Position::new(5, 7)), Some(CellKind::Hazard));

        // Verify internal array
        assert_eq!(board.cells[0], CellKind::Resource);
        assert_eq!(board.cells[5 * 10 + 7], CellKind::Hazard);
    }

    #[test]
    fn test_take_clears_cell() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);
        board.set(pos, CellKind::Resource);

        assert_eq!(board.take(pos), Some(CellKind::Resource));
        assert_eq!(board.get(pos), Some(CellKind::Empty));
        assert_eq!(board.take(Position::new(-1, 3)), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let board = Board::new();
        let positions: Vec<Position> = board.iter().map(|(p, _)| p).collect();
        assert_eq!(positions.len(), CELL_COUNT);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[10], Position::new(1, 0));
        assert_eq!(positions[99], Position::new(9, 9));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(Board::from_rows(&["..........",]).is_err());

        let mut rows = vec![".........."; 10];
        rows[4] = "....";
        assert!(Board::from_rows(&rows).is_err());

        rows[4] = "....Z.....";
        assert!(Board::from_rows(&rows).is_err());
    }
}
