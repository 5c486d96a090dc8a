//! tetrissh (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tetrissh::{types,core,play,input,term}` and carries the pieces the binary
//! shares with the integration tests.

pub mod bot;
pub mod cli;
pub mod logging;
pub mod timers;

pub use tetrissh_core as core;
pub use tetrissh_input as input;
pub use tetrissh_play as play;
pub use tetrissh_term as term;
pub use tetrissh_types as types;
