//! Game rules for ten-by-ten five-in-a-row
//!
//! Overlines win. There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winning_line, WIN_LENGTH};
