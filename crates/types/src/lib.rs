//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, persistence).
//!
//! # Game Timing
//!
//! The simulation runs on a fixed tick. Every derived quantity (distance, time
//! survived, spawn cadence) is expressed in ticks.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval (20 ticks per second) |
//! | `TERRAIN_SCROLL_TICKS` | 2 | Terrain advances one column every 2 ticks |
//! | `COLLECTIBLE_SPAWN_TICKS` | 100 | Minimum ticks between collectible spawns |
//! | `COLLECT_FLASH_TICKS` | 20 | Duration of the pickup flash |
//!
//! # Plane Physics
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PITCH_FORCE` | 1.0 | Velocity added per unit of pitch input |
//! | `GRAVITY` | 0.3 | Velocity removed every tick |
//! | `DRAG` | 0.9 | Velocity damping factor |
//! | `ALTITUDE_TOP_MARGIN` | 2 | Lowest allowed altitude row |
//! | `ALTITUDE_BOTTOM_MARGIN` | 3 | Highest allowed row is `height - 3` |
//!
//! # Examples
//!
//! ```
//! use tui_flight_types::{Key, Pitch, FlightPhase, TERRAIN_MIN_HEIGHT, TERRAIN_MAX_HEIGHT};
//!
//! // Keys map onto pitch input; quit and silence are neutral.
//! assert_eq!(Pitch::from_key(Some(Key::Up)), Pitch::Up);
//! assert_eq!(Pitch::from_key(Some(Key::Quit)), Pitch::Neutral);
//! assert_eq!(Pitch::from_key(None), Pitch::Neutral);
//! assert_eq!(Pitch::Down.value(), -1.0);
//!
//! assert!(FlightPhase::Flying.is_flying());
//! assert_eq!(TERRAIN_MIN_HEIGHT, 3);
//! assert_eq!(TERRAIN_MAX_HEIGHT, 8);
//! ```

/// Fixed timestep interval in milliseconds (50ms = 20 ticks per second)
pub const TICK_MS: u32 = 50;

/// Velocity added per unit of pitch input.
pub const PITCH_FORCE: f32 = 1.0;

/// Constant downward pull applied every tick.
pub const GRAVITY: f32 = 0.3;

/// Velocity damping factor applied every tick (air resistance).
pub const DRAG: f32 = 0.9;

/// Smallest altitude row the plane may occupy.
pub const ALTITUDE_TOP_MARGIN: u16 = 2;

/// The plane may not go below row `screen_height - ALTITUDE_BOTTOM_MARGIN`.
pub const ALTITUDE_BOTTOM_MARGIN: u16 = 3;

/// Lowest terrain column height (inclusive).
pub const TERRAIN_MIN_HEIGHT: u16 = 3;

/// Highest terrain column height (inclusive).
pub const TERRAIN_MAX_HEIGHT: u16 = 8;

/// Height reported for columns outside the terrain.
pub const TERRAIN_FALLBACK_HEIGHT: u16 = 5;

/// Number of `scroll` calls per one-column advance.
pub const TERRAIN_SCROLL_TICKS: u32 = 2;

/// Minimum ticks between two collectible spawns.
pub const COLLECTIBLE_SPAWN_TICKS: u64 = 100;

/// Default points awarded for a collectible.
pub const COLLECTIBLE_VALUE: u32 = 50;

/// Topmost row a collectible may spawn on.
pub const COLLECTIBLE_MIN_Y: i32 = 5;

/// Collectibles spawn no lower than row `screen_height - COLLECTIBLE_BOTTOM_MARGIN`.
pub const COLLECTIBLE_BOTTOM_MARGIN: i32 = 10;

/// Horizontal pickup distance (columns, inclusive).
pub const COLLECT_RADIUS_X: i32 = 2;

/// Vertical pickup distance (rows, inclusive).
pub const COLLECT_RADIUS_Y: i32 = 1;

/// How long the pickup flash stays on screen.
pub const COLLECT_FLASH_TICKS: u64 = 20;

/// Distance is one unit per this many ticks.
pub const DISTANCE_TICKS: u64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 50);
        assert_eq!(TERRAIN_SCROLL_TICKS, 2);
        assert_eq!(COLLECTIBLE_SPAWN_TICKS, 100);
        assert_eq!(DISTANCE_TICKS, 2);
    }

    #[test]
    fn terrain_fallback_is_inside_height_range() {
        assert!((TERRAIN_MIN_HEIGHT..=TERRAIN_MAX_HEIGHT).contains(&TERRAIN_FALLBACK_HEIGHT));
    }
}

/// Keys recognised by the game.
///
/// Anything the input layer does not map to one of these is treated as no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Pull up
    Up,
    /// Push down
    Down,
    /// Leave the game (from any phase)
    Quit,
}

/// Discrete pitch input applied to the plane each tick.
///
/// - **Up**: +1
/// - **Neutral**: 0
/// - **Down**: -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pitch {
    Up,
    #[default]
    Neutral,
    Down,
}

impl Pitch {
    /// Map an optional key to pitch. `Quit` and no key are neutral.
    pub fn from_key(key: Option<Key>) -> Self {
        match key {
            Some(Key::Up) => Pitch::Up,
            Some(Key::Down) => Pitch::Down,
            Some(Key::Quit) | None => Pitch::Neutral,
        }
    }

    /// Signed input value used by the physics integrator.
    pub fn value(&self) -> f32 {
        match self {
            Pitch::Up => 1.0,
            Pitch::Neutral => 0.0,
            Pitch::Down => -1.0,
        }
    }
}

/// Game phase.
///
/// The only transition is `Flying` -> `Crashed`; there is no way back within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlightPhase {
    #[default]
    Flying,
    Crashed,
}

impl FlightPhase {
    pub fn is_flying(&self) -> bool {
        matches!(self, FlightPhase::Flying)
    }
}
