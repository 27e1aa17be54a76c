//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for 2048.
//! It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function of the grid and the injected RNG
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: Square N x N grid with bounds-checked accessors and directional line I/O
//! - [`line`]: The compress + single-pass merge algorithm applied to one line
//! - [`spawn`]: Random tile placement (uniform empty cell, 2 at 90% / 4 at 10%)
//! - [`engine`]: [`GridEngine`], owning grid, score, and the sticky win latch
//! - [`snapshot`]: Plain-data copy of engine state for renderers
//!
//! # Game Rules
//!
//! - **Moves**: Tiles slide toward one edge; empty cells close up
//! - **Merges**: Two equal neighbours become one tile of double value; a tile
//!   merges at most once per move
//! - **Score**: Each merge adds the merged tile's value
//! - **Spawns**: Every move that changes the grid spawns exactly one new tile
//! - **Win**: A tile reaches 2048; the win is sticky until reset and play may continue
//! - **Game over**: No empty cell and no adjacent equal pair
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GridEngine;
//!
//! // Create a seeded game (two tiles already spawned)
//! let mut game = GridEngine::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Slide tiles; `true` means the grid changed and a redraw is warranted
//! let _redraw = game.move_left();
//! game.move_up();
//!
//! // Query state
//! assert!(!game.is_game_over());
//! assert!(!game.has_won());
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod line;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{GridEngine, MoveOutcome};
pub use error::GridError;
pub use grid::Grid;
pub use line::{slide_line, LineResult};
pub use snapshot::GameSnapshot;
pub use spawn::{pick_empty, random_tile_value, spawn_tile};
