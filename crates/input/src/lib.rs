//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Key`] and provides a
//! non-blocking [`InputSource`] that the game loop polls once per tick.

pub mod map;
pub mod poll;

pub use tui_flight_types as types;

pub use map::{map_key_event, should_quit};
pub use poll::{reduce_keys, CrosstermInput, InputSource, ScriptedInput};
