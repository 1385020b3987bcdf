//! Turn flow and session lifecycle
//!
//! - [`controller`]: pure turn state machine over the board
//! - [`session`]: owns the controller, countdown, opponent and virtual clock
//! - [`events`]: notifications for the presentation layer

pub mod controller;
pub mod events;
pub mod session;

use std::fmt;

use crate::board::Stone;

pub use controller::{MoveOutcome, TurnController};
pub use events::GameEvent;
pub use session::Session;

/// The side the computer plays in [`GameMode::PvComputer`].
pub const COMPUTER_STONE: Stone = Stone::Yellow;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[default]
    PvP,
    /// Black is human, Yellow is the random opponent
    PvComputer,
}

impl GameMode {
    /// Whether `player` is moved by the computer in this mode
    #[inline]
    pub fn is_computer(self, player: Stone) -> bool {
        matches!(self, GameMode::PvComputer) && player == COMPUTER_STONE
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Five or more in a row
    Win,
    /// The player to move ran out of time
    Timeout,
    /// Board filled with no five
    Draw,
}

/// Turn controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Stone),
    GameOver {
        reason: GameOverReason,
        winner: Option<Stone>,
    },
}

impl Phase {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Phase::AwaitingMove(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingMove(player) => write!(f, "{}, Play!", player.name()),
            Phase::GameOver {
                reason: GameOverReason::Win,
                winner: Some(w),
            } => write!(f, "{} wins!", w.name()),
            Phase::GameOver {
                reason: GameOverReason::Timeout,
                winner: Some(w),
            } => write!(f, "{} wins due to time limit!", w.name()),
            Phase::GameOver { .. } => write!(f, "Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(Phase::AwaitingMove(Stone::Black).to_string(), "Black, Play!");
        let won = Phase::GameOver {
            reason: GameOverReason::Win,
            winner: Some(Stone::Yellow),
        };
        assert_eq!(won.to_string(), "Yellow wins!");
        let timed_out = Phase::GameOver {
            reason: GameOverReason::Timeout,
            winner: Some(Stone::Black),
        };
        assert_eq!(timed_out.to_string(), "Black wins due to time limit!");
        let drawn = Phase::GameOver {
            reason: GameOverReason::Draw,
            winner: None,
        };
        assert_eq!(drawn.to_string(), "Draw!");
        assert!(!drawn.is_active());
    }

    #[test]
    fn test_computer_side() {
        assert!(GameMode::PvComputer.is_computer(Stone::Yellow));
        assert!(!GameMode::PvComputer.is_computer(Stone::Black));
        assert!(!GameMode::PvP.is_computer(Stone::Yellow));
    }
}
