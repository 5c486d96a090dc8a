//! Play modes - single player and in-process versus matches
//!
//! This crate drives [`tetrissh_core::Game`] from timed and discrete
//! messages, and pairs two running games so each player can watch the other.
//!
//! # Pieces
//!
//! - [`cancel`]: one-shot cancellation signal owned by a match
//! - [`session`]: the shared, lock-guarded board snapshot of one player
//! - [`matchmaker`]: a single worker task pairing sessions FIFO
//! - [`versus`]: per-match controller (Looking → Running → Canceled)
//! - [`single`]: single-player driver
//! - [`effect`]: messages in, effects out
//!
//! # Scheduling
//!
//! Controllers never sleep or block. The caller feeds [`Msg`]s and honours the
//! returned [`Effect`]s, in particular `ScheduleFall` and `ScheduleLook`,
//! which ask for the next tick after a delay. Only the matchmaker worker
//! waits, on its own request queue.
//!
//! ```no_run
//! use tetrissh_play::{Matchmaker, MatchController, PlayConfig};
//!
//! # async fn demo() {
//! let config = PlayConfig::default();
//! let (matchmaker, worker) = Matchmaker::new(config.queue_capacity);
//! tokio::spawn(worker.run());
//!
//! let mut controller = MatchController::new(&matchmaker, &config, 42);
//! let effects = controller.init();
//! # let _ = effects;
//! # }
//! ```

pub mod cancel;
pub mod config;
pub mod effect;
pub mod error;
pub mod matchmaker;
pub mod session;
pub mod single;
pub mod versus;

pub use tetrissh_core as core;
pub use tetrissh_types as types;

pub use cancel::{CancelSource, CancelToken};
pub use config::PlayConfig;
pub use effect::{Effect, Effects, Msg};
pub use error::{MatchError, SessionError};
pub use matchmaker::{MatchRequest, Matchmaker, MatchmakerWorker};
pub use session::{Session, SessionId};
pub use single::{SinglePlayer, SingleView};
pub use versus::{score_ratio, MatchController, MatchState, MatchView};
