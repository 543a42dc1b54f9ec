//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders
//! into a simple framebuffer that is flushed to the terminal backend in one
//! pass per keystroke.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view reads snapshots only)
//! - Give precise control over aspect ratio (2 chars wide per board cell)
//! - Restore the terminal reliably on exit

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_connect_four_core as core;
pub use tui_connect_four_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
