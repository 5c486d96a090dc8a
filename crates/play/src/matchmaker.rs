//! Matchmaker - pairs sessions into two-player matches
//!
//! One [`MatchmakerWorker`] task consumes a bounded FIFO queue of
//! [`MatchRequest`]s and holds at most one pending request:
//!
//! - nothing pending: the new request becomes pending
//! - pending request is dead: it is discarded and the new one becomes pending
//! - new request is dead: it is discarded and the pending one keeps waiting
//! - otherwise: each side receives the other's session and pending clears
//!
//! A request is dead once its session is canceled or its requester stopped
//! listening. Replies go through single-use channels, so no requester is
//! ever answered twice, and a discarded request sees its channel close.
//!
//! The worker runs until every [`Matchmaker`] handle is dropped.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::error::MatchError;
use crate::session::Session;

/// A session waiting for an opponent, plus where to deliver the opponent
#[derive(Debug)]
pub struct MatchRequest {
    pub session: Session,
    pub reply: oneshot::Sender<Session>,
}

impl MatchRequest {
    fn is_live(&self) -> bool {
        !self.session.is_cancelled() && !self.reply.is_closed()
    }
}

/// Handle used to submit match requests
#[derive(Debug, Clone)]
pub struct Matchmaker {
    tx: mpsc::Sender<MatchRequest>,
}

/// The pairing loop; spawn [`MatchmakerWorker::run`] once per application
#[derive(Debug)]
pub struct MatchmakerWorker {
    rx: mpsc::Receiver<MatchRequest>,
}

impl Matchmaker {
    /// Create a matchmaker with a request queue of `capacity` (at least 1)
    pub fn new(capacity: usize) -> (Matchmaker, MatchmakerWorker) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Matchmaker { tx }, MatchmakerWorker { rx })
    }

    /// Queue `session` for pairing without waiting
    ///
    /// The returned receiver yields the opponent's session once paired, or
    /// closes if the request is discarded.
    pub fn request(&self, session: Session) -> Result<oneshot::Receiver<Session>, MatchError> {
        let (reply, rx) = oneshot::channel();
        let id = session.id();
        self.tx
            .try_send(MatchRequest { session, reply })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => MatchError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => MatchError::QueueClosed,
            })?;
        debug!(session = %id, "match requested");
        Ok(rx)
    }

    /// Whether the worker is still accepting requests
    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl MatchmakerWorker {
    pub async fn run(mut self) {
        info!("matchmaker started");
        let mut pending: Option<MatchRequest> = None;

        while let Some(next) = self.rx.recv().await {
            pending = match pending.take() {
                None => Some(next),
                Some(held) if !held.is_live() => {
                    debug!(session = %held.session.id(), "discarding canceled pending request");
                    Some(next)
                }
                Some(held) if !next.is_live() => {
                    debug!(session = %next.session.id(), "discarding canceled request");
                    Some(held)
                }
                Some(held) => {
                    pair(held, next);
                    None
                }
            };
        }

        info!("matchmaker stopped");
    }
}

fn pair(first: MatchRequest, second: MatchRequest) {
    let (a, b) = (first.session.id(), second.session.id());
    info!(first = %a, second = %b, "pairing sessions");

    if first.reply.send(second.session.clone()).is_err() {
        warn!(session = %a, "requester left before pairing completed");
    }
    if second.reply.send(first.session).is_err() {
        warn!(session = %b, "requester left before pairing completed");
    }
}
