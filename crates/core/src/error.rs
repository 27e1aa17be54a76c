use crate::types::{Tile, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Errors from building a grid with caller-supplied dimensions or contents.
///
/// Moves, spawns, and resets never fail; only construction does.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {0} out of range ({}..={})", MIN_GRID_SIZE, MAX_GRID_SIZE)]
    InvalidSize(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}
