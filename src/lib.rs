//! Ten-by-ten five-in-a-row with a per-turn countdown
//!
//! Two players, Black and Yellow, alternate placing stones on a 10x10 grid.
//! Five or more in a row (horizontal, vertical or either diagonal) wins.
//! Each turn runs a 15 second countdown; a player who lets it expire loses.
//! A game is either hotseat (PvP) or against a computer that plays a
//! uniformly random empty cell as Yellow.
//!
//! # Architecture
//!
//! - [`board`]: cell storage and coordinates
//! - [`rules`]: win detection through the last move
//! - [`timer`]: countdown with cancellable handles
//! - [`opponent`]: the random computer player
//! - [`game`]: turn state machine and the [`Session`] a UI drives
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEvent, GameMode, Session, SessionConfig, Stone};
//!
//! let mut session = Session::start(GameMode::PvComputer, SessionConfig::headless().with_seed(7));
//! session.submit_move(45);
//!
//! // With no opponent delay the computer has already answered.
//! assert_eq!(session.current_player(), Stone::Black);
//! assert_eq!(session.board().stone_count(), 2);
//!
//! for event in session.drain_events() {
//!     if let GameEvent::CellChanged { index, stone } = event {
//!         println!("{index} -> {stone:?}");
//!     }
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod opponent;
pub mod rules;
pub mod timer;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use config::SessionConfig;
pub use error::MoveError;
pub use game::{GameEvent, GameMode, GameOverReason, Phase, Session};
pub use opponent::{Opponent, RandomOpponent};
