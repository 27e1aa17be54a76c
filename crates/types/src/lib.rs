//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid of `N x N` cells:
//!
//! - **Default**: 4x4 (the classic 2048 board)
//! - **Range**: 2x2 up to 8x8
//! - **Coordinates**: `(row, col)`, row 0 is the top edge, col 0 is the left edge
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Grid dimension for a new game |
//! | `MIN_GRID_SIZE` | 2 | Smallest accepted grid dimension |
//! | `MAX_GRID_SIZE` | 8 | Largest accepted grid dimension |
//! | `WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned when a session starts |
//! | `SPAWN_FOUR_IN_TEN` | 1 | Out of 10 spawns, how many are a 4 |
//! | `MAX_TILE` | 2^31 | Largest tile; never merges |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, MAX_TILE, WIN_VALUE};
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert!(Direction::Down.is_reversed());
//! assert!(WIN_VALUE < MAX_TILE);
//! ```

/// Grid dimension for a new game (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest accepted grid dimension
pub const MIN_GRID_SIZE: usize = 2;

/// Largest accepted grid dimension
///
/// Line buffers are stack-allocated with this capacity.
pub const MAX_GRID_SIZE: usize = 8;

/// Maximum number of cells on any accepted grid
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Reaching a tile of this value wins the game
pub const WIN_VALUE: Tile = 2048;

/// Number of tiles spawned on a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Out of every 10 spawns, this many are a 4 (the rest are a 2)
pub const SPAWN_FOUR_IN_TEN: u32 = 1;

/// Largest value a tile can hold.
///
/// Doubling it would overflow [`Tile`], so two tiles of this value never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// A grid cell value.
///
/// - `0`: Empty cell
/// - `2, 4, 8, ...`: A tile holding that power of two
pub type Tile = u32;

/// Score counter type
pub type Score = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(WIN_VALUE, 2048);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(SPAWN_FOUR_IN_TEN, 1);
        assert!(WIN_VALUE.is_power_of_two());
    }

    #[test]
    fn grid_size_range_contains_default() {
        assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&DEFAULT_GRID_SIZE));
        assert_eq!(MAX_CELLS, 64);
    }

    #[test]
    fn max_tile_is_largest_power_of_two() {
        assert!(MAX_TILE.is_power_of_two());
        assert_eq!(MAX_TILE.checked_mul(2), None);
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());

        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Up.is_reversed());
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Down.is_reversed());
    }
}

/// The four directions tiles can slide in
///
/// The direction names the **leading edge**: the grid edge tiles move toward.
/// - **Left** / **Right**: each row is a line
/// - **Up** / **Down**: each column is a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Lowercase name, used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True when lines are rows (left/right moves)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the leading edge is at the high index end of each line
    /// (right/down), so positions along a line count down from the edge.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and consumed by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward one edge
    Move(Direction),
    /// Discard the current game and start over
    Restart,
}

/// Derived state of a session
///
/// Never stored; always computed from the grid and the win latch.
/// - **InProgress**: moves are possible and no winning tile has appeared
/// - **Won**: a tile reached [`WIN_VALUE`] at some point this session
/// - **Over**: the grid is full and no adjacent pair can merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Over,
}
