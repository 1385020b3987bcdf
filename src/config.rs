//! Session configuration.
//!
//! Board size and win length are fixed; only timing and the opponent's RNG
//! seed vary between sessions.

use std::time::Duration;

/// Seconds a player has to move before losing on time.
pub const TURN_SECONDS: u32 = 15;

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Delay before the computer answers a human move.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(500);

/// Timing and randomness knobs for a [`crate::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Countdown length in ticks.
    pub turn_seconds: u32,
    /// Wall time per tick.
    pub tick_period: Duration,
    /// Presentation delay before the computer plays.
    pub opponent_delay: Duration,
    /// Fixed seed for the random opponent; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_seconds: TURN_SECONDS,
            tick_period: TICK_PERIOD,
            opponent_delay: OPPONENT_DELAY,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Defaults with no opponent delay, for tests and headless drivers.
    pub fn headless() -> Self {
        Self {
            opponent_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Zero is clamped to one so a countdown always has a tick to expire on.
    pub fn with_turn_seconds(mut self, seconds: u32) -> Self {
        self.turn_seconds = seconds.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_game() {
        let config = SessionConfig::default();
        assert_eq!(config.turn_seconds, 15);
        assert_eq!(config.tick_period, Duration::from_secs(1));
        assert_eq!(config.opponent_delay, Duration::from_millis(500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_headless_has_no_delay() {
        let config = SessionConfig::headless().with_seed(7);
        assert_eq!(config.opponent_delay, Duration::ZERO);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.turn_seconds, TURN_SECONDS);
    }

    #[test]
    fn test_turn_seconds_clamped() {
        assert_eq!(SessionConfig::default().with_turn_seconds(0).turn_seconds, 1);
    }
}
