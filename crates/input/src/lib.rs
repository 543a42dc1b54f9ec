//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and hosts the
//! column cursor that turns actions into validated column choices for the
//! engine.

pub mod cursor;
pub mod map;

pub use tui_connect_four_types as types;

pub use cursor::ColumnCursor;
pub use map::{handle_key_event, should_quit};
