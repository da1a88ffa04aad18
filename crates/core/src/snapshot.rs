use crate::types::FlightPhase;

/// Collectible position as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectibleSnapshot {
    pub x: i32,
    pub y: i32,
    pub value: u32,
}

/// Plain-data view of a [`FlightGame`](crate::FlightGame) for rendering.
///
/// `terrain` and `collectibles` are refilled in place by
/// `FlightGame::snapshot_into`, so a snapshot kept across frames stops
/// allocating once its buffers have grown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightSnapshot {
    pub screen_width: u16,
    pub screen_height: u16,
    pub tick: u64,
    pub phase: FlightPhase,
    pub altitude: f32,
    pub display_altitude: f32,
    pub velocity: f32,
    pub plane_x: i32,
    pub plane_y: i32,
    pub terrain: Vec<u16>,
    pub collectibles: Vec<CollectibleSnapshot>,
    pub distance: u64,
    pub time_survived_secs: f64,
    pub collectible_count: u32,
    pub score: u64,
    pub high_score: u32,
    pub new_high_score: bool,
    pub last_collect_tick: Option<u64>,
    pub last_collect_points: u32,
}

impl FlightSnapshot {
    pub fn crashed(&self) -> bool {
        !self.phase.is_flying()
    }

    /// Whether the final score tied or beat the high score.
    pub fn reached_high_score(&self) -> bool {
        self.score >= self.high_score as u64
    }

    /// Whether the pickup flash is still showing at this tick.
    pub fn collect_flash_active(&self, flash_ticks: u64) -> bool {
        match self.last_collect_tick {
            Some(t) => self.tick.saturating_sub(t) < flash_ticks,
            None => false,
        }
    }
}
