//! Automated opponent.

use rand::prelude::*;
use tracing::debug;

use crate::board::Board;

/// Picks a move for the side to play.
pub trait Opponent {
    /// Cell index to play, or `None` when the board has no empty cell.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;
}

/// Plays a uniformly random empty cell.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::new)
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let choice = board.empty_cells().choose(&mut self.rng);
        debug!(?choice, "random opponent picked");
        choice
    }
}
