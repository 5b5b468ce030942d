//! Grid module - the playing field and the placement engine
//!
//! The grid is `width` columns by `height` rows of occupancy flags, stored as a
//! flat row-major buffer (`y * width + x`). Row 0 is the top row and row
//! `height - 1` rests on the floor.
//!
//! Per turn a driver calls [`Grid::find_resting_row`], then [`Grid::place`],
//! then [`Grid::clear_full_rows`]. [`Grid::stack_height`] is the progress metric.

use std::fmt;

use crate::catalog::Block;
use crate::types::EngineError;

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Both dimensions must be positive and fit in an `i32` coordinate.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Build a grid from text rows, top row first. `#` is filled, anything
    /// else is empty. All rows must have the same length.
    ///
    /// ```
    /// use tetris_sim_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["....", "#..#", "####"]).unwrap();
    /// assert_eq!(grid.width(), 4);
    /// assert_eq!(grid.stack_height(), 2);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut grid = Self::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(EngineError::InvalidDimensions {
                    width: row.chars().count(),
                    height: rows.len(),
                });
            }
            for (x, c) in row.chars().enumerate() {
                grid.cells[y * width + x] = c == '#';
            }
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, filled: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Whether `block` with its top-left corner at column `x`, row `y` stays
    /// inside the grid and overlaps no occupied cell.
    pub fn can_place(&self, block: &Block, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x + block.width() > self.width || y + block.height() > self.height {
            return false;
        }
        block
            .cells()
            .all(|(dx, dy)| !self.cells[(y + dy) * self.width + x + dx])
    }

    /// Row where `block` comes to rest when dropped at column `x`.
    ///
    /// Rows are scanned from the top; the first row where the block fits and
    /// either touches the floor or would collide one row lower is returned.
    ///
    /// ```
    /// use tetris_sim_core::{get_block, Grid};
    /// use tetris_sim_types::BlockKind;
    ///
    /// let grid = Grid::new(10, 20).unwrap();
    /// assert_eq!(grid.find_resting_row(get_block(BlockKind::Q), 0), Ok(18));
    /// ```
    pub fn find_resting_row(&self, block: &Block, x: i32) -> Result<i32, EngineError> {
        let not_placeable = EngineError::NotPlaceable { column: x };
        if block.width() > self.width || block.height() > self.height {
            return Err(not_placeable);
        }
        if x < 0 || x as usize > self.width - block.width() {
            return Err(not_placeable);
        }

        let last = (self.height - block.height()) as i32;
        for y in 0..=last {
            if self.can_place(block, x, y) && (y == last || !self.can_place(block, x, y + 1)) {
                return Ok(y);
            }
        }
        Err(not_placeable)
    }

    /// Fill every cell covered by `block` at `(x, y)`.
    ///
    /// The position is re-validated; on failure the grid is left untouched.
    pub fn place(&mut self, block: &Block, x: i32, y: i32) -> Result<(), EngineError> {
        if !self.can_place(block, x, y) {
            return Err(EngineError::Blocked { x, y });
        }
        let (x, y) = (x as usize, y as usize);
        for (dx, dy) in block.cells() {
            self.cells[(y + dy) * self.width + x + dx] = true;
        }
        Ok(())
    }

    /// Remove row `y` and shift every row above it down by one.
    /// Row 0 becomes empty.
    fn remove_row(&mut self, y: usize) {
        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(false);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans from the floor upwards. After removing a row the same index is
    /// examined again, since it now holds the row that was above it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Distance from the floor to the topmost occupied cell, 0 when empty
    pub fn stack_height(&self) -> usize {
        self.cells
            .iter()
            .position(|&c| c)
            .map(|idx| self.height - idx / self.width)
            .unwrap_or(0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
