//! TUI Connect Four (workspace facade crate).
//!
//! This package keeps the public `tui_connect_four::{core,input,term,types}`
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_connect_four_core as core;
pub use tui_connect_four_input as input;
pub use tui_connect_four_term as term;
pub use tui_connect_four_types as types;
