//! Game session: the interface a presentation layer drives.
//!
//! A session owns exactly one board, turn controller, countdown and opponent.
//! Time is virtual: the caller reports elapsed wall time through
//! [`Session::advance`] and every deferred action (countdown ticks, the
//! computer's delayed reply) fires in chronological order from there. All
//! transitions therefore run one at a time on the caller's thread.
//!
//! ```
//! use gomoku::{GameMode, Session, SessionConfig, Stone};
//! use std::time::Duration;
//!
//! let mut session = Session::start(GameMode::PvP, SessionConfig::default());
//! session.submit_move(44);
//! assert_eq!(session.cell_state(44), Some(Stone::Black));
//! assert_eq!(session.current_player(), Stone::Yellow);
//!
//! session.advance(Duration::from_secs(15));
//! assert!(!session.is_active());
//! assert_eq!(session.status_text(), "Black wins due to time limit!");
//! ```

use std::time::Duration;

use tracing::{debug, info, trace};

use super::{GameEvent, GameMode, GameOverReason, MoveOutcome, Phase, TurnController};
use crate::board::{Board, Pos, Stone};
use crate::config::SessionConfig;
use crate::error::MoveError;
use crate::opponent::{Opponent, RandomOpponent};
use crate::rules::find_winning_line;
use crate::timer::{Countdown, TickOutcome, TimerHandle};

/// Computer reply scheduled for one specific turn
#[derive(Debug, Clone, Copy)]
struct PendingReply {
    due_at: Duration,
    turn: u64,
}

/// What fires next on the virtual clock
enum Due {
    Reply(PendingReply),
    Tick(TimerHandle),
}

pub struct Session<O: Opponent = RandomOpponent> {
    config: SessionConfig,
    mode: GameMode,
    controller: TurnController,
    countdown: Countdown,
    timer: Option<TimerHandle>,
    opponent: O,

    now: Duration,
    next_tick_at: Option<Duration>,
    pending_reply: Option<PendingReply>,
    /// Bumped on every transition; a reply scheduled for an older turn is dropped.
    turn: u64,

    last_move: Option<usize>,
    winning_line: Option<Vec<Pos>>,
    events: Vec<GameEvent>,
}

impl Session<RandomOpponent> {
    /// Start a session with a random opponent seeded from `config.seed`.
    pub fn start(mode: GameMode, config: SessionConfig) -> Self {
        Self::with_opponent(mode, config, RandomOpponent::with_seed(config.seed))
    }
}

impl<O: Opponent> Session<O> {
    /// Start a session with a caller-supplied opponent.
    pub fn with_opponent(mode: GameMode, config: SessionConfig, opponent: O) -> Self {
        let mut session = Self {
            config,
            mode,
            controller: TurnController::new(),
            countdown: Countdown::new(config.turn_seconds),
            timer: None,
            opponent,
            now: Duration::ZERO,
            next_tick_at: None,
            pending_reply: None,
            turn: 0,
            last_move: None,
            winning_line: None,
            events: Vec::new(),
        };
        info!(?mode, "session started");
        session.begin_turn();
        session
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Play `index` for the human to move. Illegal or late moves do nothing.
    pub fn submit_move(&mut self, index: usize) {
        if let Err(err) = self.try_submit_move(index) {
            debug!(index, %err, "move ignored");
        }
    }

    /// Like [`Session::submit_move`] but reports why a move was refused.
    pub fn try_submit_move(&mut self, index: usize) -> Result<(), MoveError> {
        let player = self.controller.to_move().ok_or(MoveError::GameNotActive)?;
        if self.mode.is_computer(player) {
            return Err(MoveError::NotYourTurn);
        }
        self.play(index)?;
        // A zero-delay reply is due right now.
        self.run_until(self.now);
        Ok(())
    }

    /// Clear the board and start over with Black to move and a full countdown.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.pending_reply = None;

        let cleared: Vec<usize> = self
            .controller
            .board()
            .iter()
            .filter(|&(_, stone)| stone != Stone::Empty)
            .map(|(idx, _)| idx)
            .collect();
        self.controller.reset();
        self.events.extend(cleared.into_iter().map(|index| GameEvent::CellChanged {
            index,
            stone: Stone::Empty,
        }));

        self.last_move = None;
        self.winning_line = None;
        info!(mode = ?self.mode, "session reset");
        self.begin_turn();
    }

    /// Move the virtual clock forward, firing every tick and reply that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.run_until(self.now.saturating_add(elapsed));
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn cell_state(&self, index: usize) -> Option<Stone> {
        self.controller.board().cell(index)
    }

    /// Player to move. Once the game is over, the player whose turn ended it:
    /// the loser on timeout, the mover on a five or a full board.
    pub fn current_player(&self) -> Stone {
        match self.controller.phase() {
            Phase::AwaitingMove(player) => player,
            Phase::GameOver {
                reason: GameOverReason::Timeout,
                winner: Some(winner),
            } => winner.opponent(),
            Phase::GameOver {
                winner: Some(winner),
                ..
            } => winner,
            Phase::GameOver { winner: None, .. } => self
                .last_move
                .and_then(|idx| self.cell_state(idx))
                .unwrap_or(Stone::Black),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    #[inline]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.controller.board()
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Stones of the winning run after a five-in-a-row
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Whether the computer is to move and its reply is pending
    pub fn is_computer_turn(&self) -> bool {
        self.controller
            .to_move()
            .is_some_and(|player| self.mode.is_computer(player))
    }

    /// Time until the next scheduled tick or reply, if any
    pub fn time_to_next_event(&self) -> Option<Duration> {
        self.next_due().map(|(at, _)| at.saturating_sub(self.now))
    }

    pub fn status_text(&self) -> String {
        self.controller.phase().to_string()
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    /// Apply a move for whoever is to play and follow up on the outcome.
    fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let outcome = self.controller.submit_move(index)?;
        let stone = self.controller.board().cell(index).unwrap_or(Stone::Empty);
        self.last_move = Some(index);
        self.events.push(GameEvent::CellChanged { index, stone });

        match outcome {
            MoveOutcome::Continue { .. } => self.begin_turn(),
            MoveOutcome::Won { winner } => {
                self.winning_line = find_winning_line(self.controller.board(), index, winner);
                self.finish(GameOverReason::Win, Some(winner));
            }
            MoveOutcome::Drawn => self.finish(GameOverReason::Draw, None),
        }
        Ok(())
    }

    /// Restart the countdown for the player now to move and schedule the
    /// computer's reply if it is the computer's turn.
    fn begin_turn(&mut self) {
        let Some(player) = self.controller.to_move() else {
            return;
        };
        self.turn += 1;
        self.cancel_timer();
        self.timer = Some(self.countdown.start());
        self.next_tick_at = Some(self.now.saturating_add(self.config.tick_period));
        self.events.push(GameEvent::TurnChanged(player));

        self.pending_reply = self.mode.is_computer(player).then(|| PendingReply {
            due_at: self.now.saturating_add(self.config.opponent_delay),
            turn: self.turn,
        });
        debug!(?player, turn = self.turn, "turn started");
    }

    fn finish(&mut self, reason: GameOverReason, winner: Option<Stone>) {
        self.turn += 1;
        self.cancel_timer();
        self.pending_reply = None;
        self.events.push(GameEvent::GameOver { reason, winner });
        info!(?reason, ?winner, "game over");
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.countdown.cancel(handle);
        }
        self.next_tick_at = None;
    }

    // ---------------------------------------------------------------------
    // Virtual clock
    // ---------------------------------------------------------------------

    /// Earliest scheduled action. A reply wins a tie with a tick.
    fn next_due(&self) -> Option<(Duration, Due)> {
        let reply = self.pending_reply.map(|r| (r.due_at, Due::Reply(r)));
        let tick = match (self.next_tick_at, self.timer) {
            (Some(at), Some(handle)) => Some((at, Due::Tick(handle))),
            _ => None,
        };
        match (reply, tick) {
            (Some(r), Some(t)) => Some(if t.0 < r.0 { t } else { r }),
            (r, t) => r.or(t),
        }
    }

    fn run_until(&mut self, target: Duration) {
        while let Some((at, due)) = self.next_due() {
            if at > target {
                break;
            }
            self.now = self.now.max(at);
            match due {
                Due::Reply(reply) => self.fire_reply(reply),
                Due::Tick(handle) => self.fire_tick(handle),
            }
        }
        self.now = self.now.max(target);
    }

    fn fire_tick(&mut self, handle: TimerHandle) {
        match self.countdown.tick(handle) {
            TickOutcome::Ticked(remaining) => {
                trace!(remaining, "tick");
                self.events.push(GameEvent::Tick(remaining));
                self.next_tick_at = Some(self.now.saturating_add(self.config.tick_period));
            }
            TickOutcome::Expired => {
                self.events.push(GameEvent::Tick(0));
                self.timer = None;
                self.next_tick_at = None;
                if let Some(winner) = self.controller.timer_expired() {
                    self.finish(GameOverReason::Timeout, Some(winner));
                }
            }
            TickOutcome::Stale => {
                self.timer = None;
                self.next_tick_at = None;
            }
        }
    }

    fn fire_reply(&mut self, reply: PendingReply) {
        self.pending_reply = None;
        if reply.turn != self.turn || !self.is_computer_turn() {
            return;
        }
        match self.opponent.choose_move(self.controller.board()) {
            Some(index) => {
                if let Err(err) = self.play(index) {
                    debug!(index, %err, "computer move rejected");
                }
            }
            None => debug!("computer has no move"),
        }
    }
}
