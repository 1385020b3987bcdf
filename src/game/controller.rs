//! Turn state machine.
//!
//! `AwaitingMove(player)` accepts moves for `player` and timer expiry.
//! `GameOver` accepts nothing but [`TurnController::reset`].

use tracing::{debug, instrument};

use super::{GameOverReason, Phase};
use crate::board::{Board, Stone};
use crate::error::MoveError;
use crate::rules::check_win;

/// What a legal move led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No five; `next` is now to move
    Continue { next: Stone },
    /// The mover made five in a row
    Won { winner: Stone },
    /// The move filled the board without a five
    Drawn,
}

/// Owns the board and whose turn it is
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    phase: Phase,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove(Stone::Black),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Player to move, or `None` once the game is over
    #[inline]
    pub fn to_move(&self) -> Option<Stone> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::GameOver { .. } => None,
        }
    }

    /// Play `index` for the player to move.
    ///
    /// On error nothing changes.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameNotActive)?;
        self.board.place(index, player)?;

        let outcome = if check_win(&self.board, index, player) {
            self.phase = Phase::GameOver {
                reason: GameOverReason::Win,
                winner: Some(player),
            };
            MoveOutcome::Won { winner: player }
        } else if self.board.is_full() {
            self.phase = Phase::GameOver {
                reason: GameOverReason::Draw,
                winner: None,
            };
            MoveOutcome::Drawn
        } else {
            let next = player.opponent();
            self.phase = Phase::AwaitingMove(next);
            MoveOutcome::Continue { next }
        };
        debug!(?outcome, "move applied");
        Ok(outcome)
    }

    /// The player to move ran out of time. Returns the winner.
    ///
    /// `None` (and no change) when the game is already over.
    pub fn timer_expired(&mut self) -> Option<Stone> {
        let loser = self.to_move()?;
        let winner = loser.opponent();
        self.phase = Phase::GameOver {
            reason: GameOverReason::Timeout,
            winner: Some(winner),
        };
        Some(winner)
    }

    /// Back to an empty board with Black to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::AwaitingMove(Stone::Black);
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
