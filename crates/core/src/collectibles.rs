//! Collectible field - bonus items that scroll through the play field
//!
//! Items spawn at the right edge, move one column left per tick, and are
//! compacted away once collected or off screen. Storage order is spawn order,
//! so the oldest item in reach wins when several overlap.

use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{
    ALTITUDE_BOTTOM_MARGIN, ALTITUDE_TOP_MARGIN, COLLECTIBLE_BOTTOM_MARGIN, COLLECTIBLE_MIN_Y,
    COLLECTIBLE_SPAWN_TICKS, COLLECTIBLE_VALUE, COLLECT_RADIUS_X, COLLECT_RADIUS_Y,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collectible {
    pub x: i32,
    pub y: i32,
    pub value: u32,
    pub active: bool,
}

impl Collectible {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            value: COLLECTIBLE_VALUE,
            active: true,
        }
    }

    fn in_reach(&self, px: i32, py: i32) -> bool {
        (self.x - px).abs() <= COLLECT_RADIUS_X && (self.y - py).abs() <= COLLECT_RADIUS_Y
    }
}

#[derive(Debug, Clone)]
pub struct CollectibleField {
    items: Vec<Collectible>,
    last_spawn_tick: u64,
    screen_width: u16,
    screen_height: u16,
    rng: SimpleRng,
}

impl CollectibleField {
    pub fn new(screen_width: u16, screen_height: u16, rng: SimpleRng) -> Self {
        Self {
            items: Vec::new(),
            last_spawn_tick: 0,
            screen_width,
            screen_height,
            rng,
        }
    }

    /// Scroll, compact, then spawn if the spawn interval has elapsed.
    pub fn update(&mut self, tick: u64) {
        for item in self.items.iter_mut().filter(|c| c.active) {
            item.x -= 1;
        }
        self.items.retain(|c| c.active && c.x >= 0);

        if tick.saturating_sub(self.last_spawn_tick) >= COLLECTIBLE_SPAWN_TICKS {
            self.spawn();
            self.last_spawn_tick = tick;
        }
    }

    /// Append one collectible at the right edge.
    pub fn spawn(&mut self) {
        let x = self.screen_width as i32 - 1;
        let y = self.spawn_row();
        debug!(x, y, "collectible spawned");
        self.items.push(Collectible::new(x, y));
    }

    /// Uniform row in `[5, height - 10]`.
    ///
    /// On screens too short for that band the row is clamped into the plane's
    /// reachable band instead, without consuming a random draw.
    fn spawn_row(&mut self) -> i32 {
        let lo = COLLECTIBLE_MIN_Y;
        let hi = self.screen_height as i32 - COLLECTIBLE_BOTTOM_MARGIN;
        if hi >= lo {
            return self.rng.next_in(lo, hi);
        }
        let top = ALTITUDE_TOP_MARGIN as i32;
        let bottom = (self.screen_height as i32 - ALTITUDE_BOTTOM_MARGIN as i32).max(top);
        lo.clamp(top, bottom)
    }

    /// Collect the first active item within reach of `(px, py)`.
    pub fn check_collision(&mut self, px: i32, py: i32) -> Option<u32> {
        let item = self
            .items
            .iter_mut()
            .find(|c| c.active && c.in_reach(px, py))?;
        item.active = false;
        Some(item.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    /// Items that are still collectable.
    pub fn active(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter().filter(|c| c.active)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_spawn_tick(&self) -> u64 {
        self.last_spawn_tick
    }

    /// Place an item directly, after everything already in the field.
    pub fn insert(&mut self, item: Collectible) {
        self.items.push(item);
    }
}
