//! Cell storage for the 10x10 grid

use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::MoveError;

/// Game board: one [`Stone`] per cell, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Get stone by cell index, `None` outside the grid
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Stone> {
        self.cells.get(index).copied()
    }

    /// Check if the cell at `index` is empty. Out-of-range indices are never empty.
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cell(index) == Some(Stone::Empty)
    }

    /// Place a stone on an empty cell
    ///
    /// Fails with [`MoveError::OutOfRange`] for an index outside the grid and
    /// [`MoveError::OccupiedCell`] if the cell already holds a stone.
    /// [`Stone::Empty`] is not a move and is refused the same way.
    pub fn place(&mut self, index: usize, stone: Stone) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        if *cell != Stone::Empty || stone == Stone::Empty {
            return Err(MoveError::OccupiedCell(index));
        }
        *cell = stone;
        Ok(())
    }

    /// Indices of all empty cells, ascending. Recomputed on every call.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            cells: self.cells.iter().enumerate(),
        }
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Iterate `(index, stone)` over every cell
    pub fn iter(&self) -> impl Iterator<Item = (usize, Stone)> + '_ {
        self.cells.iter().copied().enumerate()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over empty cell indices
pub struct EmptyCells<'a> {
    cells: std::iter::Enumerate<std::slice::Iter<'a, Stone>>,
}

impl Iterator for EmptyCells<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .find(|&(_, &s)| s == Stone::Empty)
            .map(|(idx, _)| idx)
    }
}
