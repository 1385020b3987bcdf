//! Per-turn countdown with cancellable handles.
//!
//! The countdown only counts ticks; the session decides when a tick happens.
//! Every [`Countdown::start`] hands out a fresh [`TimerHandle`] and makes all
//! earlier handles stale, so a superseded turn can never tick or expire.

use tracing::trace;

/// Identifies one started countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Handle was cancelled or superseded; nothing changed.
    Stale,
    /// Time remains.
    Ticked(u32),
    /// Reached zero. Reported exactly once per handle.
    Expired,
}

/// Countdown from a fixed number of ticks to zero.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    running: bool,
    generation: u64,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
            generation: 0,
        }
    }

    /// Start from full duration, invalidating any earlier handle.
    pub fn start(&mut self) -> TimerHandle {
        self.generation += 1;
        self.remaining = self.duration;
        self.running = true;
        trace!(generation = self.generation, "countdown started");
        TimerHandle {
            generation: self.generation,
        }
    }

    /// Stop the countdown if `handle` is still the live one.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if self.is_live(handle) {
            self.running = false;
            trace!(generation = handle.generation, "countdown cancelled");
        }
    }

    /// Deliver one tick on behalf of `handle`.
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome {
        if !self.is_live(handle) {
            return TickOutcome::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked(self.remaining)
    }

    #[inline]
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.running && handle.generation == self.generation
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
