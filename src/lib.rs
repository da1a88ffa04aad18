//! TUI Flight (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_flight::{core,input,store,term,types}` and owns the
//! pieces that tie them together: environment config and the frame loop.

pub use tui_flight_core as core;
pub use tui_flight_input as input;
pub use tui_flight_store as store;
pub use tui_flight_term as term;
pub use tui_flight_types as types;

pub mod app;
pub mod config;
