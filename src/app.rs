//! The fixed-tick frame loop shared by the binary and headless tests.
//!
//! One iteration is one tick: present the current frame, poll for at most the
//! rest of the tick, stop on quit, otherwise step the simulation.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{FlightGame, FlightSnapshot, StepOutcome};
use crate::input::InputSource;
use crate::types::TICK_MS;

/// Loop pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Wall-clock length of one tick. Zero runs as fast as input allows.
    pub tick: Duration,
    /// Stop after this many iterations even without a quit key.
    pub max_ticks: Option<u64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            max_ticks: None,
        }
    }
}

impl LoopOptions {
    /// No sleeping, bounded run.
    pub fn headless(max_ticks: u64) -> Self {
        Self {
            tick: Duration::ZERO,
            max_ticks: Some(max_ticks),
        }
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    TickLimit,
}

/// Drive `game` until quit, presenting every frame through `present`.
///
/// Returns how the loop ended. Errors from input or presentation abort the
/// loop; the caller restores the terminal.
pub fn run_loop<I, P>(
    game: &mut FlightGame,
    input: &mut I,
    opts: LoopOptions,
    mut present: P,
) -> Result<LoopExit>
where
    I: InputSource + ?Sized,
    P: FnMut(&FlightSnapshot) -> Result<()>,
{
    let mut snap = FlightSnapshot::default();
    let mut iterations: u64 = 0;

    loop {
        if opts.max_ticks.is_some_and(|max| iterations >= max) {
            debug!(iterations, "tick limit reached");
            return Ok(LoopExit::TickLimit);
        }
        iterations += 1;

        let tick_start = Instant::now();

        game.snapshot_into(&mut snap);
        present(&snap)?;

        let timeout = opts.tick.saturating_sub(tick_start.elapsed());
        let key = input.poll_key(timeout)?;

        let was_flying = !game.crashed();
        if game.apply_key(key) == StepOutcome::Quit {
            info!(tick = game.tick(), score = game.score(), "quit");
            return Ok(LoopExit::Quit);
        }
        if was_flying && game.crashed() {
            // Draw the wreck right away rather than on the next tick.
            game.snapshot_into(&mut snap);
            present(&snap)?;
        }

        // A key can arrive before the tick is up; keep the pace steady.
        let left = opts.tick.saturating_sub(tick_start.elapsed());
        if !left.is_zero() {
            std::thread::sleep(left);
        }
    }
}
