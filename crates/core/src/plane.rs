//! Plane physics - vertical motion driven by pitch input
//!
//! Altitude is a screen row measured from the top of the viewport, so a
//! positive (upward) velocity *decreases* the altitude value.

use crate::types::{Pitch, ALTITUDE_BOTTOM_MARGIN, ALTITUDE_TOP_MARGIN, DRAG, GRAVITY, PITCH_FORCE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    altitude: f32,
    velocity: f32,
    screen_height: u16,
}

impl Plane {
    /// Create a plane in the middle of the screen, at rest.
    pub fn new(screen_height: u16) -> Self {
        Self::with_state(screen_height, (screen_height / 2) as f32, 0.0)
    }

    pub fn with_state(screen_height: u16, altitude: f32, velocity: f32) -> Self {
        Self {
            altitude,
            velocity,
            screen_height,
        }
    }

    /// Integrate one tick of pitch input.
    pub fn update(&mut self, pitch: Pitch) {
        self.velocity += pitch.value() * PITCH_FORCE - GRAVITY;
        self.velocity *= DRAG;
        self.altitude -= self.velocity;

        // Low clamp first, then high clamp.
        let top = ALTITUDE_TOP_MARGIN as f32;
        let bottom = self.screen_height as f32 - ALTITUDE_BOTTOM_MARGIN as f32;
        if self.altitude < top {
            self.altitude = top;
            self.velocity = 0.0;
        }
        if self.altitude > bottom {
            self.altitude = bottom;
            self.velocity = 0.0;
        }
    }

    pub fn altitude(&self) -> f32 {
        self.altitude
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn screen_height(&self) -> u16 {
        self.screen_height
    }

    /// Screen row the plane is drawn on.
    pub fn row(&self) -> i32 {
        self.altitude.floor() as i32
    }

    /// Height above the bottom of the screen, as shown on the HUD.
    pub fn display_altitude(&self) -> f32 {
        self.screen_height as f32 - self.altitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_new_plane_starts_mid_screen_at_rest() {
        let plane = Plane::new(21);
        assert_eq!(plane.altitude(), 10.0);
        assert_eq!(plane.velocity(), 0.0);
        assert_eq!(plane.row(), 10);
    }

    #[test]
    fn test_neutral_tick_sinks_under_gravity() {
        let mut plane = Plane::with_state(20, 10.0, 0.0);
        plane.update(Pitch::Neutral);
        assert!((plane.velocity() - (-0.27)).abs() < EPS);
        assert!((plane.altitude() - 10.27).abs() < EPS);
    }

    #[test]
    fn test_pitch_up_climbs() {
        let mut plane = Plane::with_state(20, 10.0, 0.0);
        plane.update(Pitch::Up);
        // (1.0 - 0.3) * 0.9 = 0.63 upward
        assert!((plane.velocity() - 0.63).abs() < EPS);
        assert!((plane.altitude() - 9.37).abs() < EPS);
    }

    #[test]
    fn test_pitch_down_dives() {
        let mut plane = Plane::with_state(20, 10.0, 0.0);
        plane.update(Pitch::Down);
        assert!((plane.velocity() - (-1.17)).abs() < EPS);
        assert!((plane.altitude() - 11.17).abs() < EPS);
    }

    #[test]
    fn test_clamps_at_top_and_zeroes_velocity() {
        let mut plane = Plane::with_state(20, 2.2, 0.0);
        plane.update(Pitch::Up);
        assert_eq!(plane.altitude(), 2.0);
        assert_eq!(plane.velocity(), 0.0);
    }

    #[test]
    fn test_clamps_at_bottom_and_zeroes_velocity() {
        let mut plane = Plane::with_state(20, 16.8, 0.0);
        plane.update(Pitch::Down);
        assert_eq!(plane.altitude(), 17.0);
        assert_eq!(plane.velocity(), 0.0);
    }

    #[test]
    fn test_altitude_stays_in_band_for_long_inputs() {
        let mut plane = Plane::new(24);
        let pattern = [Pitch::Up, Pitch::Up, Pitch::Neutral, Pitch::Down, Pitch::Down, Pitch::Down];
        for i in 0..2000 {
            plane.update(pattern[i % pattern.len()]);
            assert!(plane.altitude() >= 2.0 && plane.altitude() <= 21.0);
        }
    }

    #[test]
    fn test_physics_is_reproducible() {
        let inputs = [Pitch::Up, Pitch::Neutral, Pitch::Down, Pitch::Up];
        let mut a = Plane::new(30);
        let mut b = Plane::new(30);
        for _ in 0..50 {
            for &p in &inputs {
                a.update(p);
                b.update(p);
            }
        }
        assert_eq!(a.altitude().to_bits(), b.altitude().to_bits());
        assert_eq!(a.velocity().to_bits(), b.velocity().to_bits());
    }

    #[test]
    fn test_display_altitude_measures_from_bottom() {
        let plane = Plane::with_state(20, 5.0, 0.0);
        assert_eq!(plane.display_altitude(), 15.0);
    }
}
