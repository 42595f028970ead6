//! Grid state - bounded 2D cell grid with row compaction
//!
//! Cells are stored in a flat row-major array for cache locality. Coordinates
//! are (row, col) with row 0 at the top. Out-of-range access is an explicit
//! error, never a silent clamp.

use crate::types::{Cell, SimError};

/// Fixed-size rows x cols grid of cell tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty. Zero-sized dimensions are
    /// rejected at construction time.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SimError> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidConfig("grid dimensions must be nonzero"));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, SimError> {
        if row >= self.rows || col >= self.cols {
            return Err(SimError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get cell at (row, col), failing fast when out of range
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, SimError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col), failing fast when out of range
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), SimError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Check occupancy at signed coordinates. Anything outside the grid
    /// counts as occupied, which is what piece placement checks want.
    pub fn occupied(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return true;
        }
        self.cells[row as usize * self.cols + col as usize] != 0
    }

    /// True iff every cell in the row is non-zero. Rows outside the grid are
    /// never full.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter().all(|&c| c != 0)
    }

    /// Remove every full row, shift the remaining rows down and refill the
    /// top with empty rows. Returns the number of rows cleared.
    ///
    /// Two-pointer compaction scanning bottom to top; no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let cols = self.cols;
        let mut cleared = 0;
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * cols;
                    let dst = write_row * cols;
                    self.cells.copy_within(src..src + cols, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_row * cols] {
            *cell = 0;
        }

        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = 0;
        }
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Result<&[Cell], SimError> {
        if row >= self.rows {
            return Err(SimError::OutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }
}

/// 90 degree clockwise rotation via transpose-and-reverse: column `i` of the
/// output is row `i` of the input read bottom to top. Produces a new matrix
/// without mutating the input; this is the shared piece-rotation contract.
pub fn rotate_cw(matrix: &[Vec<Cell>]) -> Vec<Vec<Cell>> {
    if matrix.is_empty() {
        return Vec::new();
    }
    let rows = matrix.len();
    let cols = matrix[0].len();
    (0..cols)
        .map(|i| (0..rows).map(|j| matrix[rows - 1 - j][i]).collect())
        .collect()
}
