//! Win condition checking for five-in-a-row
//!
//! Only the four lines through the last placed stone are examined. A win
//! cannot exist before a move because the check runs after every placement.

use crate::board::{Board, Pos, Stone};
use tracing::instrument;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Longest same-color walk from `pos` along `(dr, dc)`, excluding `pos` itself.
///
/// Stops after `WIN_LENGTH - 1` steps, at the board edge, or at the first
/// cell that is not `color`. The bounds check precedes every read.
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    for i in 1..WIN_LENGTH as i32 {
        let r = pos.row as i32 + dr * i;
        let c = pos.col as i32 + dc * i;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != color {
            break;
        }
        count += 1;
    }
    count
}

/// Run length through `pos` along one direction (both ways plus the stone itself)
#[inline]
fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), color: Stone) -> usize {
    1 + walk(board, pos, dr, dc, color) + walk(board, pos, -dr, -dc, color)
}

/// Check whether the stone just played at `last_index` completes five or more.
///
/// Returns false for an out-of-range index or for [`Stone::Empty`].
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, last_index: usize, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    let Some(pos) = Pos::from_index(last_index) else {
        return false;
    };
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, pos, dir, color) >= WIN_LENGTH)
}

/// Cells of the winning run through `last_index`, in board order.
///
/// Unlike [`check_win`] the walk is not capped, so an overline returns every
/// stone of it.
pub fn find_winning_line(board: &Board, last_index: usize, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty {
        return None;
    }
    let pos = Pos::from_index(last_index)?;

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let (mut r, mut c) = (pos.row as i32 - dr, pos.col as i32 - dc);
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        let (mut r, mut c) = (pos.row as i32 + dr, pos.col as i32 + dc);
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
