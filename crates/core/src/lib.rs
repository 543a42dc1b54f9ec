//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and match state management. It
//! has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same match
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the grid, landing-row lookup, placement, fullness queries
//! - [`config`]: players, grid dimensions, fail-fast validation
//! - [`game_state`]: the match state machine driving turns and outcomes
//! - [`rules`]: four-in-a-row win detection
//! - [`snapshot`]: plain-data view consumed by the render layer
//!
//! # Game Rules
//!
//! Two players alternate dropping pieces into columns; a piece settles at
//! the lowest empty row of its column. The first four-in-a-row (horizontal,
//! vertical, or either diagonal) wins; a full board without one ties.
//! `Won` and `Tied` are terminal - further moves are rejected as values,
//! never as panics.
//!
//! # Example
//!
//! ```
//! use tui_connect_four_core::{GameState, MatchConfig};
//! use tui_connect_four_types::{Outcome, Seat};
//!
//! let mut game = GameState::new(MatchConfig::default()).unwrap();
//!
//! // First drops into the middle column of the empty 7x6 board.
//! let placed = game.play_column(3).unwrap();
//! assert_eq!(placed.row, 5);
//! assert_eq!(placed.outcome, Outcome::Continue);
//!
//! // The turn has passed to the other seat.
//! assert_eq!(game.current_seat(), Seat::Second);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use tui_connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, MatchConfig, Player};
pub use game_state::{GameState, LegalColumns};
pub use rules::find_winning_run;
pub use snapshot::GameSnapshot;
