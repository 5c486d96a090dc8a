//! Session - one player's board as seen by the other player
//!
//! The owning match publishes a fresh snapshot after every change; the
//! opponent reads it. Each write replaces the whole snapshot, so readers only
//! ever see complete boards. Once the cancellation signal fires, every board
//! read fails.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::cancel::CancelToken;
use crate::error::SessionError;
use crate::types::Grid;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Published {
    board: Option<Arc<Grid>>,
    score: Option<u32>,
    /// Bumped on every write
    version: u64,
}

#[derive(Debug)]
struct Inner {
    id: SessionId,
    cancel: CancelToken,
    published: RwLock<Published>,
}

/// Shared handle to one player's published board and score
///
/// Cloning is cheap; all clones see the same state.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: SessionId::next(),
                cancel,
                published: RwLock::new(Published::default()),
            }),
        }
    }

    pub fn id(&self) -> SessionId {
        self.inner.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    /// Resolve once the owning match cancels
    pub async fn cancelled(&self) {
        self.inner.cancel.cancelled().await
    }

    /// Replace the published board
    pub fn set_board(&self, board: Grid) {
        let board = Arc::new(board);
        let mut published = self.write();
        published.board = Some(board);
        published.version += 1;
    }

    /// Replace the published score
    pub fn set_score(&self, score: u32) {
        let mut published = self.write();
        published.score = Some(score);
        published.version += 1;
    }

    /// Replace board and score together
    pub fn publish(&self, board: Grid, score: u32) {
        let board = Arc::new(board);
        let mut published = self.write();
        published.board = Some(board);
        published.score = Some(score);
        published.version += 1;
    }

    /// Latest board snapshot
    ///
    /// Fails with [`SessionError::Cancelled`] once the session is canceled,
    /// even if a write is racing with this read.
    pub fn board(&self) -> Result<Arc<Grid>, SessionError> {
        if self.is_cancelled() {
            return Err(SessionError::Cancelled);
        }
        let published = self.read();
        // Checked again under the lock: cancellation that won the race wins.
        if self.is_cancelled() {
            return Err(SessionError::Cancelled);
        }
        published.board.clone().ok_or(SessionError::Unset)
    }

    /// Last published score, 0 if none
    pub fn score(&self) -> u32 {
        self.read().score.unwrap_or(0)
    }

    /// Number of writes so far
    pub fn version(&self) -> u64 {
        self.read().version
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Published> {
        self.inner
            .published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Published> {
        self.inner
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel;

    fn grid_with(code: u8) -> Grid {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, code);
        grid
    }

    #[test]
    fn unset_board_is_reported() {
        let (_source, token) = cancel::pair();
        let session = Session::new(token);
        assert_eq!(session.board(), Err(SessionError::Unset));
        assert_eq!(session.score(), 0);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn set_board_replaces_snapshot() {
        let (_source, token) = cancel::pair();
        let session = Session::new(token);
        session.set_board(grid_with(1));
        let first = session.board().unwrap();
        session.set_board(grid_with(2));

        // earlier snapshot is unaffected by the later write
        assert_eq!(first.get(1, 1), Some(1));
        assert_eq!(session.board().unwrap().get(1, 1), Some(2));
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn publish_sets_board_and_score() {
        let (_source, token) = cancel::pair();
        let session = Session::new(token);
        session.publish(grid_with(3), 700);
        assert_eq!(session.score(), 700);
        assert_eq!(session.board().unwrap().get(1, 1), Some(3));

        session.set_score(800);
        assert_eq!(session.score(), 800);
    }

    #[test]
    fn cancelled_session_never_returns_board() {
        let (source, token) = cancel::pair();
        let session = Session::new(token);
        session.publish(grid_with(1), 100);
        source.cancel();

        for _ in 0..3 {
            assert_eq!(session.board(), Err(SessionError::Cancelled));
            session.set_board(grid_with(2));
        }
        assert!(session.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let (source, token) = cancel::pair();
        let writer = Session::new(token);
        let reader = writer.clone();
        assert_eq!(reader.id(), writer.id());

        writer.publish(grid_with(4), 10);
        assert_eq!(reader.score(), 10);

        drop(source);
        assert!(reader.board().is_err());
    }

    #[test]
    fn ids_are_unique() {
        let (_a, ta) = cancel::pair();
        let (_b, tb) = cancel::pair();
        assert_ne!(Session::new(ta).id(), Session::new(tb).id());
    }

    #[test]
    fn cancelled_future_wakes_on_cancel() {
        let (source, token) = cancel::pair();
        let session = Session::new(token);
        let mut waiter = tokio_test::task::spawn(session.cancelled());
        tokio_test::assert_pending!(waiter.poll());

        source.cancel();
        assert!(waiter.is_woken());
        tokio_test::assert_ready!(waiter.poll());
    }
}
