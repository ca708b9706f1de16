//! Cooperative periodic timers for the single-threaded event loop.
//!
//! Timers never fire on their own: the event loop asks for the next deadline,
//! waits, then collects due tokens with [`Timers::take_due`]. Every `arm`
//! issues a fresh generation, so a token obtained before a `disarm` can be
//! recognised as stale and dropped.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// What a timer drives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Log/telemetry simulator.
    Simulator,
    /// Row feed of the named workspace tab.
    Feed(String),
}

/// A single firing of a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerToken {
    pub key: TimerKey,
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u64,
    period: Duration,
    deadline: Instant,
}

/// Set of armed periodic timers.
#[derive(Debug, Default)]
pub struct Timers {
    slots: HashMap<TimerKey, Slot>,
    next_generation: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) `key`; the first firing is one period after `now`.
    pub fn arm(&mut self, key: TimerKey, period: Duration, now: Instant) -> TimerToken {
        self.next_generation += 1;
        let generation = self.next_generation;
        tracing::debug!(?key, generation, ?period, "timer armed");
        self.slots.insert(
            key.clone(),
            Slot {
                generation,
                period,
                deadline: now + period,
            },
        );
        TimerToken { key, generation }
    }

    /// Cancels `key`. Outstanding tokens become stale.
    pub fn disarm(&mut self, key: &TimerKey) -> bool {
        let removed = self.slots.remove(key).is_some();
        if removed {
            tracing::debug!(?key, "timer disarmed");
        }
        removed
    }

    /// Cancels every timer.
    pub fn disarm_all(&mut self) {
        if !self.slots.is_empty() {
            tracing::debug!(count = self.slots.len(), "all timers disarmed");
        }
        self.slots.clear();
    }

    pub fn is_armed(&self, key: &TimerKey) -> bool {
        self.slots.contains_key(key)
    }

    /// True if `token` belongs to the live arming of its timer.
    pub fn is_current(&self, token: &TimerToken) -> bool {
        self.slots
            .get(&token.key)
            .is_some_and(|slot| slot.generation == token.generation)
    }

    /// Earliest deadline among armed timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.values().map(|slot| slot.deadline).min()
    }

    /// Collects at most one token per due timer, ordered by deadline.
    ///
    /// Missed periods are skipped rather than replayed in a burst.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(Instant, TimerToken)> = Vec::new();
        for (key, slot) in self.slots.iter_mut() {
            if slot.deadline > now {
                continue;
            }
            due.push((
                slot.deadline,
                TimerToken {
                    key: key.clone(),
                    generation: slot.generation,
                },
            ));
            slot.deadline += slot.period;
            if slot.deadline <= now {
                slot.deadline = now + slot.period;
            }
        }
        due.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.generation.cmp(&b.1.generation)));
        due.into_iter().map(|(_, token)| token).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
