//! Non-blocking key polling.
//!
//! The game loop asks for at most one key per tick. Terminals buffer auto-repeat
//! faster than the tick rate, so a poll drains everything already queued and
//! reduces it to a single key; otherwise held keys would lag behind the plane.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::Key;

/// Maximum number of queued events read in one poll.
const MAX_DRAIN: usize = 64;

/// Keys kept per poll. Mouse, focus and resize events are read but not kept,
/// so this is smaller than the drain limit.
const MAX_KEYS: usize = 16;

/// Source of per-tick key input.
pub trait InputSource {
    /// Wait at most `timeout` for input and return the key for this tick.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;
}

/// Reduce a tick's worth of keys: quit wins, otherwise the latest key.
pub fn reduce_keys(keys: &[Key]) -> Option<Key> {
    if keys.contains(&Key::Quit) {
        return Some(Key::Quit);
    }
    keys.last().copied()
}

/// Reads keys from the real terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    pending: ArrayVec<Key, MAX_KEYS>,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_event(&mut self, ev: Event) {
        let Event::Key(key) = ev else {
            return;
        };
        if key.kind == KeyEventKind::Release {
            return;
        }
        let Some(k) = map_key_event(key) else {
            return;
        };
        // Full batch: later pitch keys are dropped, but a quit replaces the last slot.
        if self.pending.try_push(k).is_err() && k == Key::Quit {
            if let Some(last) = self.pending.last_mut() {
                *last = Key::Quit;
            }
        }
    }
}

impl InputSource for CrosstermInput {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        self.pending.clear();

        if !event::poll(timeout)? {
            return Ok(None);
        }
        let first = event::read()?;
        self.push_event(first);

        let mut drained = 1;
        while drained < MAX_DRAIN && event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.push_event(ev);
            drained += 1;
        }

        Ok(reduce_keys(&self.pending))
    }
}

/// Replays a fixed key script, one entry per poll, then reports no input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<Key>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        Ok(self.script.pop_front().flatten())
    }
}
