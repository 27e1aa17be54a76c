//! Terminal rendering for the 2048 grid.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`core::GameSnapshot`] into a framebuffer of styled cells, and the
//! renderer flushes only the changed runs of that framebuffer to the terminal.
//!
//! - `fb`: framebuffer and style types
//! - `game_view`: snapshot → framebuffer (pure, unit-testable)
//! - `renderer`: framebuffer → terminal via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
