//! Game state module - the per-tick frame controller
//!
//! This module ties together all core components: plane, terrain, collectibles,
//! and the score ledger. It runs one tick of simulation per [`FlightGame::step`]
//! and owns the one-way `Flying` -> `Crashed` transition.

use tracing::{debug, info};

use crate::collectibles::CollectibleField;
use crate::plane::Plane;
use crate::rng::SimpleRng;
use crate::score::{HighScoreStore, ScoreLedger};
use crate::snapshot::{CollectibleSnapshot, FlightSnapshot};
use crate::terrain::Terrain;
use crate::types::{FlightPhase, Key, Pitch};

/// What the caller should do after feeding a key to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

/// Complete game state
#[derive(Debug)]
pub struct FlightGame {
    screen_width: u16,
    screen_height: u16,
    plane: Plane,
    terrain: Terrain,
    collectibles: CollectibleField,
    ledger: ScoreLedger,
    /// Monotonic tick counter (number of simulated ticks).
    tick: u64,
    phase: FlightPhase,
    /// Set once, at the crash transition.
    new_high_score: bool,
    last_collect_tick: Option<u64>,
    last_collect_points: u32,
}

impl FlightGame {
    /// Create a new flight on a `screen_width` x `screen_height` field.
    ///
    /// Terrain and collectible randomness are both derived from `seed`.
    pub fn new(
        screen_width: u16,
        screen_height: u16,
        seed: u32,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let mut rng = SimpleRng::new(seed);
        let terrain = Terrain::new(screen_width, SimpleRng::new(rng.next_u32()));
        let collectibles =
            CollectibleField::new(screen_width, screen_height, SimpleRng::new(rng.next_u32()));

        Self {
            screen_width,
            screen_height,
            plane: Plane::new(screen_height),
            terrain,
            collectibles,
            ledger: ScoreLedger::new(store),
            tick: 0,
            phase: FlightPhase::Flying,
            new_high_score: false,
            last_collect_tick: None,
            last_collect_points: 0,
        }
    }

    /// Apply one polled key: quit ends the game, anything else is a tick.
    pub fn apply_key(&mut self, key: Option<Key>) -> StepOutcome {
        if key == Some(Key::Quit) {
            return StepOutcome::Quit;
        }
        self.step(Pitch::from_key(key));
        StepOutcome::Continue
    }

    /// Run one tick of simulation.
    ///
    /// Returns false (and changes nothing) once crashed.
    pub fn step(&mut self, pitch: Pitch) -> bool {
        if !self.phase.is_flying() {
            return false;
        }

        self.tick += 1;
        self.plane.update(pitch);
        self.terrain.scroll();
        self.collectibles.update(self.tick);
        self.ledger.update(self.tick);

        let plane_x = self.plane_x();
        let plane_y = self.plane.row();

        if let Some(points) = self.collectibles.check_collision(plane_x, plane_y) {
            debug!(tick = self.tick, points, "collectible picked up");
            self.ledger.add_collectible(points);
            self.last_collect_tick = Some(self.tick);
            self.last_collect_points = points;
        }

        if plane_y >= self.ground_row(plane_x) - 1 {
            self.crash();
        }

        true
    }

    fn crash(&mut self) {
        self.phase = FlightPhase::Crashed;
        self.new_high_score = self.ledger.check_high_score();
        info!(
            tick = self.tick,
            score = self.ledger.score(),
            new_high_score = self.new_high_score,
            "plane crashed"
        );
    }

    /// Fixed column the plane flies in.
    pub fn plane_x(&self) -> i32 {
        (self.screen_width / 3) as i32
    }

    /// Topmost ground row under column `col`.
    fn ground_row(&self, col: i32) -> i32 {
        self.screen_height as i32 - self.terrain.height_at(col) as i32
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn crashed(&self) -> bool {
        !self.phase.is_flying()
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn last_collect_tick(&self) -> Option<u64> {
        self.last_collect_tick
    }

    pub fn score(&self) -> u64 {
        self.ledger.score()
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Mutable access to the plane, for tests and scripted setups.
    pub fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn collectibles(&self) -> &CollectibleField {
        &self.collectibles
    }

    pub fn collectibles_mut(&mut self) -> &mut CollectibleField {
        &mut self.collectibles
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut FlightSnapshot) {
        out.screen_width = self.screen_width;
        out.screen_height = self.screen_height;
        out.tick = self.tick;
        out.phase = self.phase;
        out.altitude = self.plane.altitude();
        out.display_altitude = self.plane.display_altitude();
        out.velocity = self.plane.velocity();
        out.plane_x = self.plane_x();
        out.plane_y = self.plane.row();

        out.terrain.clear();
        out.terrain.extend(self.terrain.heights());

        out.collectibles.clear();
        out.collectibles
            .extend(self.collectibles.active().map(|c| CollectibleSnapshot {
                x: c.x,
                y: c.y,
                value: c.value,
            }));

        out.distance = self.ledger.distance();
        out.time_survived_secs = self.ledger.time_survived_secs();
        out.collectible_count = self.ledger.collectible_count();
        out.score = self.ledger.score();
        out.high_score = self.ledger.high_score();
        out.new_high_score = self.new_high_score;
        out.last_collect_tick = self.last_collect_tick;
        out.last_collect_points = self.last_collect_points;
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        let mut out = FlightSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
