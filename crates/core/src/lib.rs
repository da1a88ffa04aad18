//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole flight simulation. It has **no dependencies**
//! on terminals, key events, or the filesystem, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce the same flight
//! - **Testable**: Every rule is exercised headlessly
//! - **Portable**: Any renderer can draw a [`FlightSnapshot`]
//!
//! # Module Structure
//!
//! - [`plane`]: pitch-driven vertical physics with clamping
//! - [`terrain`]: scrolling per-column ground heights
//! - [`collectibles`]: bonus item spawning, scrolling and pickup
//! - [`score`]: score ledger and the high-score persistence seam
//! - [`game_state`]: the per-tick frame controller and crash transition
//! - [`rng`]: seedable LCG shared by terrain and collectibles
//! - [`snapshot`]: plain-data view for renderers
//!
//! # Tick Order
//!
//! Each [`FlightGame::step`] while flying:
//!
//! 1. plane physics
//! 2. terrain scroll (one column every 2 ticks)
//! 3. collectible scroll / compaction / spawn
//! 4. score recompute
//! 5. collectible pickup at the plane position
//! 6. terrain collision, which may crash the plane and check the high score
//!
//! # Example
//!
//! ```
//! use tui_flight_core::{FlightGame, MemoryStore};
//! use tui_flight_types::Pitch;
//!
//! let store = MemoryStore::new(0);
//! let mut game = FlightGame::new(40, 20, 12345, Box::new(store.clone()));
//!
//! game.step(Pitch::Up);
//! game.step(Pitch::Neutral);
//!
//! assert_eq!(game.tick(), 2);
//! assert!(!game.crashed());
//! assert_eq!(game.terrain().width(), 40);
//! ```

pub mod collectibles;
pub mod game_state;
pub mod plane;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod terrain;

pub use tui_flight_types as types;

// Re-export commonly used types for convenience
pub use collectibles::{Collectible, CollectibleField};
pub use game_state::{FlightGame, StepOutcome};
pub use plane::Plane;
pub use rng::SimpleRng;
pub use score::{HighScoreStore, MemoryStore, ScoreLedger};
pub use snapshot::{CollectibleSnapshot, FlightSnapshot};
pub use terrain::Terrain;
