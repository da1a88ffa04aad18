//! RNG module - seedable randomness for terrain and collectibles
//!
//! Every random draw in the simulation goes through [`SimpleRng`], which is
//! injected into the components that need it. Same seed, same flight.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Generate random value in the closed range [lo, hi].
    ///
    /// `hi < lo` is treated as the single value `lo`.
    pub fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }

    /// Current internal state (re-seeding with it continues the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_in_stays_in_closed_range_and_hits_both_ends() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let v = rng.next_in(3, 8);
            assert!((3..=8).contains(&v), "out of range: {}", v);
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not all values drawn: {:?}", seen);
    }

    #[test]
    fn test_next_in_degenerate_range() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_in(5, 5), 5);
        assert_eq!(rng.next_in(5, 2), 5);
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(99);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
