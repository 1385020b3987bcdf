//! Property tests for board placement, win detection, the random opponent
//! and game-over immutability.

use std::time::Duration;

use gomoku::rules::check_win;
use gomoku::{
    Board, GameMode, MoveError, Opponent, Pos, RandomOpponent, Session, SessionConfig, Stone,
    TOTAL_CELLS,
};
use proptest::prelude::*;

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Full-board scan: is there a run of >= 5 `color` through `pos`?
fn brute_force_five_through(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        // Slide every window of five along the line that contains `pos`
        (-4..=0).any(|start: i32| {
            (0..5).all(|k| {
                let r = pos.row as i32 + dr * (start + k);
                let c = pos.col as i32 + dc * (start + k);
                Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color
            })
        })
    })
}

fn stone_strategy() -> impl Strategy<Value = Stone> {
    prop_oneof![Just(Stone::Black), Just(Stone::Yellow)]
}

proptest! {
    #[test]
    fn second_place_is_rejected(
        idx in 0usize..TOTAL_CELLS,
        first in stone_strategy(),
        second in stone_strategy(),
    ) {
        let mut board = Board::new();
        prop_assert!(board.place(idx, first).is_ok());
        prop_assert_eq!(board.place(idx, second), Err(MoveError::OccupiedCell(idx)));
        prop_assert_eq!(board.cell(idx), Some(first));
    }

    #[test]
    fn out_of_range_is_rejected(idx in TOTAL_CELLS..10_000usize) {
        let mut board = Board::new();
        prop_assert_eq!(board.place(idx, Stone::Black), Err(MoveError::OutOfRange(idx)));
        prop_assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn check_win_matches_brute_force(
        cells in proptest::collection::vec(0u8..3, TOTAL_CELLS),
        last in 0usize..TOTAL_CELLS,
        color in stone_strategy(),
    ) {
        let mut board = Board::new();
        for (idx, &v) in cells.iter().enumerate() {
            if idx == last {
                continue;
            }
            match v {
                1 => board.place(idx, Stone::Black).unwrap(),
                2 => board.place(idx, Stone::Yellow).unwrap(),
                _ => {}
            }
        }
        board.place(last, color).unwrap();
        let pos = Pos::from_index(last).unwrap();
        prop_assert_eq!(
            check_win(&board, last, color),
            brute_force_five_through(&board, pos, color)
        );
    }

    #[test]
    fn opponent_never_picks_occupied(
        occupied in proptest::collection::btree_set(0usize..TOTAL_CELLS, 0..TOTAL_CELLS),
        seed in any::<u64>(),
    ) {
        let mut board = Board::new();
        for &idx in &occupied {
            board.place(idx, Stone::Black).unwrap();
        }
        let mut opponent = RandomOpponent::new(seed);
        match opponent.choose_move(&board) {
            Some(idx) => prop_assert!(board.is_empty(idx)),
            None => prop_assert_eq!(occupied.len(), TOTAL_CELLS),
        }
    }

    #[test]
    fn game_over_never_mutates_board(
        moves in proptest::collection::vec(0usize..TOTAL_CELLS, 0..20),
        late in 0usize..TOTAL_CELLS,
    ) {
        let mut session = Session::start(GameMode::PvP, SessionConfig::headless().with_seed(0));
        for idx in moves {
            session.submit_move(idx);
        }
        session.advance(Duration::from_secs(15));
        prop_assert!(!session.is_active());

        let before = session.board().clone();
        session.submit_move(late);
        prop_assert_eq!(session.board(), &before);
    }
}

#[test]
fn four_in_a_row_everywhere_is_not_a_win() {
    // Horizontal runs of four separated by gaps
    let mut board = Board::new();
    for row in 0..10 {
        for col in [0, 1, 2, 3, 5, 6, 7, 8] {
            if row % 2 == 0 {
                board.place(row * 10 + col, Stone::Black).unwrap();
            }
        }
    }
    for idx in 0..TOTAL_CELLS {
        if board.cell(idx) == Some(Stone::Black) {
            assert!(!check_win(&board, idx, Stone::Black));
        }
    }
}
