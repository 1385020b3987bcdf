//! Move rejection reasons.
//!
//! None of these are fatal. The session absorbs them as silent no-ops; they
//! exist so callers and tests can see why a move was refused.

use derive_more::{Display, Error};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside `0..100`.
    #[display("cell index {_0} is outside the board")]
    OutOfRange(#[error(not(source))] usize),
    /// Target cell already holds a stone.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(#[error(not(source))] usize),
    /// The game has ended; only a reset has effect.
    #[display("game is not active")]
    GameNotActive,
    /// A human submission while the automated opponent is to move.
    #[display("it is the computer's turn")]
    NotYourTurn,
}
