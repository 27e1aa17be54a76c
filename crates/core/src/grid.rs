//! Grid module - manages the square playfield
//!
//! The grid is an N x N matrix of tiles where 0 is an empty cell.
//! Uses a flat row-major buffer; all access goes through bounds-checked accessors.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 is the left edge.
//!
//! Moves operate on **lines**: rows for left/right, columns for up/down.
//! [`Grid::read_line`] copies a line out in leading-edge-first order and
//! [`Grid::write_line`] writes it back in the same order, so one merge
//! algorithm serves every direction.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{
    Direction, Tile, DEFAULT_GRID_SIZE, MAX_CELLS, MAX_GRID_SIZE, MAX_TILE, MIN_GRID_SIZE,
};

/// A single line copied out of the grid, leading edge first
pub type LineBuf = ArrayVec<Tile, MAX_GRID_SIZE>;

/// The game grid - N x N tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from rows, validating shape and tile values
    pub fn from_rows<T: AsRef<[Tile]>>(rows: &[T]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows.len())?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != grid.size {
                return Err(GridError::NotSquare {
                    row,
                    len: cells.len(),
                    size: grid.size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                grid.cells[row * grid.size + col] = value;
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Grid dimension N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of nonzero cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t != 0).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.tile_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != 0)
    }

    /// Coordinates of every empty cell, in row-major order.
    ///
    /// Stack-only; does not allocate.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (idx, &tile) in self.cells.iter().enumerate() {
            if tile == 0 {
                out.push((idx / self.size, idx % self.size));
            }
        }
        out
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&t| t as u64).sum()
    }

    /// True if any cell holds at least `value`
    pub fn has_tile_at_least(&self, value: Tile) -> bool {
        self.cells.iter().any(|&t| t >= value)
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// mergeable value (nonzero and below [`MAX_TILE`])
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let tile = self.cells[row * n + col];
                if tile == 0 || tile >= MAX_TILE {
                    continue;
                }
                if col + 1 < n && self.cells[row * n + col + 1] == tile {
                    return true;
                }
                if row + 1 < n && self.cells[(row + 1) * n + col] == tile {
                    return true;
                }
            }
        }
        false
    }

    /// Map position `k` along line `line` (k = 0 at the leading edge) to (row, col)
    #[inline(always)]
    pub fn line_coord(&self, direction: Direction, line: usize, k: usize) -> (usize, usize) {
        let k = if direction.is_reversed() {
            self.size - 1 - k
        } else {
            k
        };
        if direction.is_horizontal() {
            (line, k)
        } else {
            (k, line)
        }
    }

    /// Copy line `line` out of the grid, leading edge first
    pub fn read_line(&self, direction: Direction, line: usize) -> LineBuf {
        (0..self.size)
            .map(|k| {
                let (row, col) = self.line_coord(direction, line, k);
                self.cells[row * self.size + col]
            })
            .collect()
    }

    /// Write a leading-edge-first buffer back into line `line`
    pub fn write_line(&mut self, direction: Direction, line: usize, values: &[Tile]) {
        debug_assert_eq!(values.len(), self.size);
        for (k, &value) in values.iter().enumerate().take(self.size) {
            let (row, col) = self.line_coord(direction, line, k);
            self.cells[row * self.size + col] = value;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![0; DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE],
        }
    }
}

/// A legal cell value: empty, or a power of two of at least 2
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 6 + 1);
        writeln!(f, "{}", rule)?;
        for row in self.cells.chunks(self.size) {
            for &tile in row {
                if tile == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", tile)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}", rule)
    }
}
