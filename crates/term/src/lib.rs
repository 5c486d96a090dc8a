//! Terminal rendering.
//!
//! Views draw into a plain framebuffer (no I/O, unit-testable); the renderer
//! flushes framebuffers to the terminal, sending only changed runs.
//!
//! Board cells are two columns wide to compensate for the usual glyph aspect
//! ratio.

pub mod fb;
pub mod renderer;
pub mod view;

pub use tetrissh_play as play;
pub use tetrissh_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{palette, GameView, Viewport};
