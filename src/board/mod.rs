//! Board representation for ten-by-ten five-in-a-row

pub mod board;


// Re-exports
pub use board::{Board, EmptyCells};

/// Board size (10x10)
pub const BOARD_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 100

/// Cell state, doubling as the player color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    Yellow,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::Yellow,
            Stone::Yellow => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Display name used in status lines
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::Yellow => "Yellow",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Row-major conversion; `None` outside `0..TOTAL_CELLS`
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= TOTAL_CELLS {
            return None;
        }
        Some(Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        })
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}
