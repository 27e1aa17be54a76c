//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps key presses into
//! [`crate::types::GameAction`]; 2048 moves are discrete, so there is no
//! auto-repeat handling here and terminal repeats are simply ignored by the runner.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
