//! Notifications emitted by a [`super::Session`].

use crate::board::Stone;

use super::GameOverReason;

/// Something the presentation layer should redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A cell changed state. `Stone::Empty` after a reset.
    CellChanged { index: usize, stone: Stone },
    /// A new turn began for `player`.
    TurnChanged(Stone),
    /// Countdown ticked; seconds left for the current turn.
    Tick(u32),
    /// Terminal transition.
    GameOver {
        reason: GameOverReason,
        winner: Option<Stone>,
    },
}
