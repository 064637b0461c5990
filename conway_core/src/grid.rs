// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

/// Fixed-size field of alive/dead cells, stored row-major.
///
/// `Clone` is a full deep copy: history snapshots and the next generation
/// never share storage with the live grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of `rows x cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Grid whose cells are produced row-major by `alive(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut alive: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(alive(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Grid with the listed cells alive. Coordinates outside the grid are rejected.
    pub fn with_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell, returning its new state. Used for manual edits.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Unchecked read for callers that already iterate inside the bounds.
    pub(crate) fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    pub fn is_all_alive(&self) -> bool {
        self.cells.iter().all(|&alive| alive)
    }

    /// Share of live cells in `[0.0, 1.0]`.
    pub fn population(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.live_count() as f32 / self.cells.len() as f32
    }

    /// `(row, col)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Iterate rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
