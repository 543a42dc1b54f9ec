//! Match configuration - the player pair, grid dimensions, and fail-fast
//! validation of caller-supplied inputs.

use crate::types::{
    Rgb, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_PLAYER_ONE_COLOR,
    DEFAULT_PLAYER_TWO_COLOR, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH,
};

/// A match participant.
///
/// A player is an opaque identity, immutable once created; here the
/// identity is a disc color. The engine never inspects it beyond telling
/// the two players apart - display text always derives from the seat, so
/// outcomes stay color-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: Rgb,
}

impl Player {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }
}

/// Constructor-time inputs for a match: two players and the grid size.
///
/// This is the core's entire configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub width: u8,
    pub height: u8,
    pub players: [Player; 2],
}

impl Default for MatchConfig {
    /// Classic 7x6 board with the fallback player colors.
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            players: [
                Player::new(DEFAULT_PLAYER_ONE_COLOR),
                Player::new(DEFAULT_PLAYER_TWO_COLOR),
            ],
        }
    }
}

impl MatchConfig {
    /// Check the inputs before any match state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.width > MAX_BOARD_WIDTH || self.height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::OversizedBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.players[0].color == self.players[1].color {
            return Err(ConfigError::MatchingPlayerColors);
        }
        Ok(())
    }
}

/// The error type for match construction.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension,
    OversizedBoard { width: u8, height: u8 },
    MatchingPlayerColors,
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDimension => {
                write!(f, "board width and height must both be at least 1")
            }
            ConfigError::OversizedBoard { width, height } => write!(
                f,
                "board {}x{} exceeds the supported maximum of {}x{}",
                width, height, MAX_BOARD_WIDTH, MAX_BOARD_HEIGHT
            ),
            ConfigError::MatchingPlayerColors => {
                write!(f, "the two players need distinguishable colors")
            }
        }
    }
}
