//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s. Terminal key
//! repeat is left to the terminal; every press is one action.

pub mod map;

pub use tetrissh_types as types;

pub use map::{handle_key_event, should_quit};
