//! Terrain generator - one ground height per screen column
//!
//! The terrain scrolls left by dropping its first column and appending a new
//! random one. Heights are independent uniform draws with no smoothing, so
//! single-column cliffs are expected.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::{
    TERRAIN_FALLBACK_HEIGHT, TERRAIN_MAX_HEIGHT, TERRAIN_MIN_HEIGHT, TERRAIN_SCROLL_TICKS,
};

#[derive(Debug, Clone)]
pub struct Terrain {
    heights: VecDeque<u16>,
    scroll_calls: u32,
    rng: SimpleRng,
}

impl Terrain {
    pub fn new(width: u16, mut rng: SimpleRng) -> Self {
        let heights = (0..width).map(|_| random_height(&mut rng)).collect();
        Self {
            heights,
            scroll_calls: 0,
            rng,
        }
    }

    /// Count one tick; advance a column every `TERRAIN_SCROLL_TICKS` calls.
    ///
    /// Returns true when the terrain moved.
    pub fn scroll(&mut self) -> bool {
        self.scroll_calls += 1;
        if self.scroll_calls >= TERRAIN_SCROLL_TICKS {
            self.scroll_calls = 0;
            self.advance();
            return true;
        }
        false
    }

    /// Shift the terrain left by one column.
    pub fn advance(&mut self) {
        if self.heights.pop_front().is_some() {
            let h = random_height(&mut self.rng);
            self.heights.push_back(h);
        }
    }

    /// Ground height at `col`, or the fallback height outside the terrain.
    pub fn height_at(&self, col: i32) -> u16 {
        if col < 0 {
            return TERRAIN_FALLBACK_HEIGHT;
        }
        self.heights
            .get(col as usize)
            .copied()
            .unwrap_or(TERRAIN_FALLBACK_HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> impl Iterator<Item = u16> + '_ {
        self.heights.iter().copied()
    }
}

fn random_height(rng: &mut SimpleRng) -> u16 {
    rng.next_in(TERRAIN_MIN_HEIGHT as i32, TERRAIN_MAX_HEIGHT as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_terrain_fills_width_with_valid_heights() {
        let terrain = Terrain::new(40, SimpleRng::new(3));
        assert_eq!(terrain.width(), 40);
        assert!(terrain.heights().all(|h| (3..=8).contains(&h)));
    }

    #[test]
    fn test_scroll_advances_every_second_call() {
        let mut terrain = Terrain::new(10, SimpleRng::new(3));
        let before: Vec<u16> = terrain.heights().collect();

        assert!(!terrain.scroll());
        assert_eq!(terrain.heights().collect::<Vec<_>>(), before);

        assert!(terrain.scroll());
        let after: Vec<u16> = terrain.heights().collect();
        assert_eq!(&after[..9], &before[1..]);
    }

    #[test]
    fn test_advance_keeps_width_and_range() {
        let mut terrain = Terrain::new(25, SimpleRng::new(11));
        for _ in 0..500 {
            terrain.advance();
            assert_eq!(terrain.width(), 25);
        }
        assert!(terrain.heights().all(|h| (3..=8).contains(&h)));
    }

    #[test]
    fn test_height_at_out_of_bounds_falls_back() {
        let terrain = Terrain::new(10, SimpleRng::new(1));
        assert_eq!(terrain.height_at(-1), 5);
        assert_eq!(terrain.height_at(10), 5);
        assert_eq!(terrain.height_at(1000), 5);
    }

    #[test]
    fn test_zero_width_terrain_is_inert() {
        let mut terrain = Terrain::new(0, SimpleRng::new(1));
        terrain.advance();
        assert_eq!(terrain.width(), 0);
        assert_eq!(terrain.height_at(0), 5);
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let mut a = Terrain::new(30, SimpleRng::new(42));
        let mut b = Terrain::new(30, SimpleRng::new(42));
        for _ in 0..20 {
            a.scroll();
            b.scroll();
        }
        assert!(a.heights().eq(b.heights()));
    }
}
