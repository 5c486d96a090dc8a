//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the falling-block rules and nothing else: no terminal, no
//! threads, no I/O. The same seed always produces the same game.
//!
//! # Module Structure
//!
//! - [`vector`]: integer 2D offsets
//! - [`piece`]: piece templates, the seven-shape catalog, 90° rotation
//! - [`rng`]: LCG and the piece source the engine draws from
//! - [`scoring`]: points per lock event
//! - [`game`]: the grid engine state machine
//!
//! # Game Rules
//!
//! - Pieces are drawn independently and uniformly from the catalog
//! - Pieces spawn at top-center; a blocked spawn ends the game
//! - Rotation is a plain 90° transform of the offsets, with no wall kicks
//! - The O piece does not rotate
//! - A piece that cannot fall locks; full rows are removed and scored
//!
//! # Example
//!
//! ```
//! use tetrissh_core::{Game, PieceSource};
//! use tetrissh_types::Action;
//!
//! let mut game = Game::new(20, 10, PieceSource::random(12345));
//! game.act(Action::MoveRight);
//! game.act(Action::HardDrop);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.board().height(), 20);
//! ```

pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod vector;

pub use tetrissh_types as types;

pub use game::{Game, Step};
pub use piece::{Piece, Tetromino};
pub use rng::{random_piece, PieceSource, SimpleRng};
pub use scoring::line_clear_score;
pub use vector::Vector;
