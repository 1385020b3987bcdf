//! Session lifecycle through the public API: moves, timeout, computer
//! replies, draws and reset.

use std::time::Duration;

use gomoku::{
    Board, GameEvent, GameMode, GameOverReason, MoveError, Opponent, Phase, Session,
    SessionConfig, Stone, TOTAL_CELLS,
};

fn pvp() -> Session {
    Session::start(GameMode::PvP, SessionConfig::headless().with_seed(3))
}

fn pvc(seed: u64) -> Session {
    Session::start(GameMode::PvComputer, SessionConfig::headless().with_seed(seed))
}

#[test]
fn test_horizontal_win_in_pvp() {
    let mut session = pvp();
    for col in 0..4 {
        session.submit_move(col);
        session.submit_move(20 + col);
    }
    assert!(session.is_active());
    session.submit_move(4);
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            reason: GameOverReason::Win,
            winner: Some(Stone::Black)
        }
    );
    assert!(!session.is_active());
}

#[test]
fn test_diagonal_win_for_yellow() {
    let mut session = pvp();
    let blacks = [9, 19, 29, 39, 59];
    let yellows = [0, 11, 22, 33, 44];
    for (b, y) in blacks.iter().zip(yellows.iter()) {
        session.submit_move(*b);
        session.submit_move(*y);
    }
    assert_eq!(session.status_text(), "Yellow wins!");
}

#[test]
fn test_timeout_after_fifteen_ticks() {
    let mut session = pvp();
    session.drain_events().for_each(drop);

    session.advance(Duration::from_secs(14));
    assert!(session.is_active());
    assert_eq!(session.remaining_seconds(), 1);

    session.advance(Duration::from_secs(1));
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            reason: GameOverReason::Timeout,
            winner: Some(Stone::Yellow)
        }
    );

    let events: Vec<GameEvent> = session.drain_events().collect();
    assert_eq!(events.len(), 16);
    assert_eq!(events[0], GameEvent::Tick(14));
    assert_eq!(events[14], GameEvent::Tick(0));
    assert_eq!(
        events[15],
        GameEvent::GameOver {
            reason: GameOverReason::Timeout,
            winner: Some(Stone::Yellow)
        }
    );

    // Expiry fires once and later moves are no-ops
    session.advance(Duration::from_secs(60));
    assert_eq!(session.drain_events().count(), 0);
    assert_eq!(session.try_submit_move(50), Err(MoveError::GameNotActive));
    assert_eq!(session.board().stone_count(), 0);
}

#[test]
fn test_timeout_on_yellow_turn() {
    let mut session = pvp();
    session.submit_move(12);
    session.advance(Duration::from_secs(15));
    assert_eq!(session.status_text(), "Black wins due to time limit!");
    assert_eq!(session.current_player(), Stone::Yellow);
}

#[test]
fn test_a_move_before_expiry_saves_the_turn() {
    let mut session = pvp();
    session.advance(Duration::from_millis(14_900));
    session.submit_move(5);
    session.advance(Duration::from_millis(14_900));
    session.submit_move(6);
    assert!(session.is_active());
    assert_eq!(session.current_player(), Stone::Black);
}

#[test]
fn test_computer_answers_every_move() {
    let mut session = pvc(42);
    for idx in [0, 13, 26, 39, 52, 65] {
        if !session.is_active() || !session.board().is_empty(idx) {
            break;
        }
        let before = session.board().stone_count();
        session.submit_move(idx);
        if session.is_active() {
            assert_eq!(session.board().stone_count(), before + 2);
            assert_eq!(session.current_player(), Stone::Black);
        }
    }
}

#[test]
fn test_computer_moves_are_yellow() {
    let mut session = pvc(8);
    session.submit_move(0);
    session.drain_events().for_each(drop);
    session.submit_move(99);
    let placed: Vec<(usize, Stone)> = session
        .drain_events()
        .filter_map(|e| match e {
            GameEvent::CellChanged { index, stone } => Some((index, stone)),
            _ => None,
        })
        .collect();
    if session.board().cell(99) == Some(Stone::Black) {
        assert_eq!(placed[0], (99, Stone::Black));
        assert_eq!(placed[1].1, Stone::Yellow);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = pvp();
    session.submit_move(1);
    session.submit_move(2);
    session.advance(Duration::from_secs(20));

    session.reset();
    let first = (session.phase(), session.board().clone(), session.remaining_seconds());
    session.reset();
    let second = (session.phase(), session.board().clone(), session.remaining_seconds());

    assert_eq!(first, second);
    assert_eq!(first.0, Phase::AwaitingMove(Stone::Black));
    assert_eq!(first.1, Board::new());
    assert_eq!(first.2, 15);
    assert!(session.winning_line().is_none());
    assert_eq!(session.last_move(), None);
}

#[test]
fn test_reset_mid_turn_gives_full_countdown() {
    let mut session = pvp();
    session.advance(Duration::from_millis(9_500));
    session.reset();
    session.advance(Duration::from_millis(14_999));
    assert!(session.is_active());
    session.advance(Duration::from_millis(1));
    assert!(!session.is_active());
}

/// Fills the board in a fixed order that never lines up five
struct Scripted(Vec<usize>);

impl Opponent for Scripted {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        while let Some(idx) = self.0.pop() {
            if board.is_empty(idx) {
                return Some(idx);
            }
        }
        None
    }
}

fn draw_color(idx: usize) -> Stone {
    let (r, c) = (idx / 10, idx % 10);
    if (c / 2 + r) % 2 == 0 {
        Stone::Black
    } else {
        Stone::Yellow
    }
}

#[test]
fn test_full_board_ends_in_draw() {
    let mut yellows: Vec<usize> = (0..TOTAL_CELLS)
        .filter(|&i| draw_color(i) == Stone::Yellow)
        .collect();
    yellows.reverse();
    let blacks: Vec<usize> = (0..TOTAL_CELLS)
        .filter(|&i| draw_color(i) == Stone::Black)
        .collect();

    let mut session = Session::with_opponent(
        GameMode::PvComputer,
        SessionConfig::headless(),
        Scripted(yellows),
    );
    for idx in blacks {
        session.submit_move(idx);
    }

    assert!(session.board().is_full());
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            reason: GameOverReason::Draw,
            winner: None
        }
    );
    assert_eq!(session.status_text(), "Draw!");
    assert_eq!(session.time_to_next_event(), None);
}
