//! Score ledger - distance, time survived, bonus points and the high score
//!
//! Score formula (all derived from the tick counter plus pickups):
//!
//! ```text
//! distance      = tick / 2
//! time_survived = tick * 50ms
//! score         = floor(distance + time_survived_secs * 10 + bonus)
//! ```
//!
//! `time_survived_secs * 10` is `time_survived_ms / 100`, so the score is kept
//! in integers and never suffers float rounding.
//!
//! The high score lives behind [`HighScoreStore`]. Stores never report errors:
//! a failed load reads as 0 and a failed save is dropped.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::info;

use crate::types::{DISTANCE_TICKS, TICK_MS};

/// Persistence collaborator for the high score.
pub trait HighScoreStore: fmt::Debug {
    /// Persisted high score, or 0 when nothing usable is stored.
    fn load_high_score(&mut self) -> u32;

    /// Overwrite the persisted high score. Failures are swallowed.
    fn save_high_score(&mut self, score: u32);
}

/// In-memory store. Clones share the same value, which lets a caller keep a
/// handle while a ledger owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> u32 {
        self.value.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u32 {
        self.value.get()
    }

    fn save_high_score(&mut self, score: u32) {
        self.value.set(score);
    }
}

#[derive(Debug)]
pub struct ScoreLedger {
    distance: u64,
    time_survived_ms: u64,
    bonus_points: u64,
    collectible_count: u32,
    high_score: u32,
    store: Box<dyn HighScoreStore>,
}

impl ScoreLedger {
    /// Create a ledger, loading the high score from `store`.
    pub fn new(mut store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load_high_score();
        Self {
            distance: 0,
            time_survived_ms: 0,
            bonus_points: 0,
            collectible_count: 0,
            high_score,
            store,
        }
    }

    /// Recompute the tick-derived parts of the score.
    pub fn update(&mut self, tick: u64) {
        self.distance = tick / DISTANCE_TICKS;
        self.time_survived_ms = tick * TICK_MS as u64;
    }

    pub fn add_collectible(&mut self, points: u32) {
        self.collectible_count += 1;
        self.bonus_points += points as u64;
    }

    pub fn score(&self) -> u64 {
        self.distance + self.time_survived_ms / 100 + self.bonus_points
    }

    /// Persist the current score if it beats the high score.
    ///
    /// The store is read again first, so a record written by another run since
    /// this ledger was built is never overwritten by a lower score.
    /// Returns true when a new high score was written.
    pub fn check_high_score(&mut self) -> bool {
        self.high_score = self.high_score.max(self.store.load_high_score());
        let score = self.score().min(u32::MAX as u64) as u32;
        if score <= self.high_score {
            return false;
        }
        info!(score, previous = self.high_score, "new high score");
        self.high_score = score;
        self.store.save_high_score(score);
        true
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn time_survived_secs(&self) -> f64 {
        self.time_survived_ms as f64 / 1000.0
    }

    pub fn bonus_points(&self) -> u64 {
        self.bonus_points
    }

    pub fn collectible_count(&self) -> u32 {
        self.collectible_count
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}
