//! Error types for sessions and matchmaking.

use thiserror::Error;

/// Failure reading a session. Callers treat this as "no data this frame".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session has been canceled")]
    Cancelled,
    #[error("session board has not been published yet")]
    Unset,
}

/// Failure requesting or running a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("matchmaker queue is full")]
    QueueFull,
    #[error("matchmaker is not running")]
    QueueClosed,
    #[error("matchmaker dropped the match request")]
    RequestDropped,
    #[error("match has no live session")]
    NoSession,
}
