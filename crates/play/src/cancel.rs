//! Cancellation signal for a match.
//!
//! A [`CancelSource`] belongs to the match that created it; every
//! [`CancelToken`] cloned from it observes cancellation. Dropping the source
//! counts as cancellation too, so a match that vanishes without quitting still
//! releases its opponent.

use tokio::sync::watch;

/// Owning side of the signal
#[derive(Debug)]
pub struct CancelSource {
    tx: watch::Sender<bool>,
}

/// Observing side of the signal
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

/// Create a linked source/token pair
pub fn pair() -> (CancelSource, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelSource { tx }, CancelToken { rx })
}

impl CancelSource {
    /// Fire the signal. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }
}

impl CancelToken {
    /// True once the source fired or was dropped. Never reverts.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once the token is cancelled
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // Err means the source is gone, which is cancellation as well.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}
