//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view only reads snapshots)
//! - Clip every out-of-bounds write instead of erroring
//! - Only write changed cells after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_flight_core as core;
pub use tui_flight_types as types;

pub use fb::{Canvas, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
