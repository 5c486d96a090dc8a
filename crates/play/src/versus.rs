//! Versus mode - one player's side of a two-player match
//!
//! A [`MatchController`] owns the local [`Game`], publishes its board into the
//! local [`Session`] after every change, and reads the opponent's session for
//! display. Its state is re-evaluated whenever it is queried:
//!
//! ```text
//! Looking ──opponent arrived, both live──▶ Running
//!    │                                       │
//!    └──local quit / request lost──▶ Canceled ◀──either side canceled
//! ```
//!
//! While Looking, [`Msg::LookTick`] checks the reply channel without waiting
//! and asks for another look tick if nobody has arrived yet.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info, warn};

use crate::cancel::{self, CancelSource};
use crate::config::PlayConfig;
use crate::core::{Game, PieceSource};
use crate::effect::{effects, Effect, Effects, Msg};
use crate::error::MatchError;
use crate::matchmaker::Matchmaker;
use crate::session::Session;
use crate::types::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Looking,
    Running,
    Canceled,
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchState::Looking => "looking for match",
            MatchState::Running => "match active",
            MatchState::Canceled => "match canceled",
        })
    }
}

/// What to show for a match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchView {
    Looking,
    Running {
        board: Grid,
        score: u32,
        game_over: bool,
        /// `None` when the opponent's board could not be read this frame
        opponent: Option<Arc<Grid>>,
        opponent_score: u32,
        /// Local share of the combined score, in `0.0..=1.0`
        ratio: f64,
    },
    Canceled,
}

/// Local share of the combined score; 0.5 when both are zero
pub fn score_ratio(score: u32, opponent_score: u32) -> f64 {
    let total = score as u64 + opponent_score as u64;
    if total == 0 {
        return 0.5;
    }
    score as f64 / total as f64
}

/// Per-match state machine
#[derive(Debug)]
pub struct MatchController {
    state: MatchState,
    game: Game,
    cancel: CancelSource,
    session: Option<Session>,
    opponent: Option<Session>,
    reply: Option<oneshot::Receiver<Session>>,
    matchmaker: Matchmaker,
    fall_interval: Duration,
    look_interval: Duration,
}

impl MatchController {
    /// Start looking for an opponent with a fresh random game
    pub fn new(matchmaker: &Matchmaker, config: &PlayConfig, seed: u32) -> Self {
        let game = Game::new(config.height, config.width, PieceSource::random(seed));
        Self::with_game(matchmaker, config, game)
    }

    pub fn with_game(matchmaker: &Matchmaker, config: &PlayConfig, game: Game) -> Self {
        let (cancel, token) = cancel::pair();
        let session = Session::new(token);
        // Published before the request so the opponent never sees an unset board.
        session.publish(game.board(), game.score());

        let mut controller = Self {
            state: MatchState::Looking,
            game,
            cancel,
            session: Some(session),
            opponent: None,
            reply: None,
            matchmaker: matchmaker.clone(),
            fall_interval: config.fall_interval,
            look_interval: config.look_interval,
        };
        if let Err(MatchError::QueueClosed) = controller.submit_request() {
            controller.close();
        }
        controller
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn opponent(&self) -> Option<&Session> {
        self.opponent.as_ref()
    }

    /// Current state, re-evaluated against both sessions
    pub fn state(&mut self) -> MatchState {
        self.refresh();
        self.state
    }

    /// Effects to apply when the mode starts
    pub fn init(&mut self) -> Effects {
        match self.state() {
            MatchState::Looking => effects(&[Effect::ScheduleLook(self.look_interval)]),
            MatchState::Running => effects(&[Effect::ScheduleFall(self.fall_interval)]),
            MatchState::Canceled => effects(&[Effect::MatchCanceled]),
        }
    }

    pub fn update(&mut self, msg: Msg) -> Effects {
        let was = self.state;
        self.refresh();

        let mut out = match msg {
            Msg::Quit => {
                self.close();
                let mut out = Effects::new();
                if was != MatchState::Canceled {
                    out.push(Effect::MatchCanceled);
                }
                out.push(Effect::Exit);
                return out;
            }
            Msg::LookTick if self.state == MatchState::Looking => self.look(),
            Msg::LookTick => Effects::new(),
            Msg::FallTick if self.playing() => {
                self.game.fall();
                self.publish();
                self.after_move()
                    .unwrap_or_else(|| effects(&[Effect::ScheduleFall(self.fall_interval)]))
            }
            Msg::Act(action) if self.playing() => {
                if self.game.act(action) {
                    self.publish();
                }
                self.after_move().unwrap_or_default()
            }
            Msg::FallTick | Msg::Act(_) => Effects::new(),
        };

        if was != MatchState::Canceled && self.state == MatchState::Canceled {
            let _ = out.try_push(Effect::MatchCanceled);
        }
        out
    }

    /// Snapshot for display
    pub fn view(&mut self) -> MatchView {
        match self.state() {
            MatchState::Looking => MatchView::Looking,
            MatchState::Canceled => MatchView::Canceled,
            MatchState::Running => {
                let (opponent, opponent_score) = match &self.opponent {
                    Some(op) => {
                        let board = op
                            .board()
                            .map_err(|e| debug!(session = %op.id(), error = %e, "opponent board unavailable"))
                            .ok();
                        (board, op.score())
                    }
                    None => (None, 0),
                };
                MatchView::Running {
                    board: self.game.board(),
                    score: self.game.score(),
                    game_over: self.game.game_over(),
                    opponent,
                    opponent_score,
                    ratio: self.score_ratio().unwrap_or(0.5),
                }
            }
        }
    }

    /// Local share of the combined published scores
    ///
    /// Fails only when a session is missing (not yet paired, or closed).
    pub fn score_ratio(&self) -> Result<f64, MatchError> {
        match (&self.session, &self.opponent) {
            (Some(local), Some(op)) => Ok(score_ratio(local.score(), op.score())),
            _ => Err(MatchError::NoSession),
        }
    }

    /// Cancel the match and release both sessions
    pub fn close(&mut self) {
        if self.state != MatchState::Canceled {
            info!(session = ?self.session.as_ref().map(Session::id), "closing match");
        }
        self.cancel.cancel();
        self.reply = None;
        self.session = None;
        self.opponent = None;
        self.state = MatchState::Canceled;
    }

    fn playing(&self) -> bool {
        self.state == MatchState::Running && !self.game.game_over()
    }

    fn publish(&self) {
        if let Some(session) = &self.session {
            session.publish(self.game.board(), self.game.score());
        }
    }

    fn after_move(&self) -> Option<Effects> {
        if !self.game.game_over() {
            return None;
        }
        let score = self.game.score();
        info!(score, "versus game over");
        Some(effects(&[Effect::GameOver { score }]))
    }

    fn submit_request(&mut self) -> Result<(), MatchError> {
        let Some(session) = &self.session else {
            return Err(MatchError::NoSession);
        };
        match self.matchmaker.request(session.clone()) {
            Ok(rx) => {
                self.reply = Some(rx);
                Ok(())
            }
            Err(MatchError::QueueFull) => {
                warn!(session = %session.id(), "matchmaker busy, will retry");
                Err(MatchError::QueueFull)
            }
            Err(e) => {
                error!(session = %session.id(), error = %e, "match request failed");
                Err(e)
            }
        }
    }

    /// Non-blocking check for an opponent
    fn look(&mut self) -> Effects {
        let again = effects(&[Effect::ScheduleLook(self.look_interval)]);

        let Some(reply) = self.reply.as_mut() else {
            return match self.submit_request() {
                Ok(()) | Err(MatchError::QueueFull) => again,
                Err(_) => {
                    self.close();
                    Effects::new()
                }
            };
        };

        match reply.try_recv() {
            Ok(opponent) => {
                info!(opponent = %opponent.id(), "opponent found");
                self.reply = None;
                self.opponent = Some(opponent);
                self.refresh();
                if self.state == MatchState::Running {
                    effects(&[
                        Effect::OpponentFound,
                        Effect::ScheduleFall(self.fall_interval),
                    ])
                } else {
                    Effects::new()
                }
            }
            Err(TryRecvError::Empty) => again,
            Err(TryRecvError::Closed) => {
                warn!(error = %MatchError::RequestDropped, "match request discarded");
                self.close();
                Effects::new()
            }
        }
    }

    fn refresh(&mut self) {
        let local_live = self.session.is_some() && !self.cancel.is_cancelled();
        let opponent_live = self.opponent.as_ref().map(|op| !op.is_cancelled());

        let next = match (self.state, opponent_live) {
            (MatchState::Canceled, _) => MatchState::Canceled,
            (_, _) if !local_live => MatchState::Canceled,
            (MatchState::Looking, None) => MatchState::Looking,
            (_, Some(true)) => MatchState::Running,
            (_, Some(false)) | (MatchState::Running, None) => MatchState::Canceled,
        };

        if next != self.state {
            info!(from = %self.state, to = %next, "match state changed");
            self.state = next;
        }
    }
}
