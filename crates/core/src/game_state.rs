//! Game state module - the match state machine
//!
//! Ties the core together: owns the board and the player pair, enforces
//! turn order, runs win and tie detection after every accepted move, and
//! locks the match once a terminal phase is reached. All mutation goes
//! through [`GameState::play_column`] and [`GameState::restart`]; everything
//! else is a read-only query.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::{ConfigError, MatchConfig, Player};
use crate::rules::find_winning_run;
use crate::snapshot::GameSnapshot;
use crate::types::{Outcome, Phase, Placement, Rejected, Run, Seat, MAX_BOARD_WIDTH};

/// Fixed-capacity, left-to-right set of playable (non-full) column indexes.
pub type LegalColumns = ArrayVec<u8, { MAX_BOARD_WIDTH as usize }>;

/// Complete match state
///
/// One `GameState` exclusively owns one board and one player pair for the
/// lifetime of a match. Turns run synchronously: a [`GameState::play_column`]
/// call completes its placement, win/tie check, and transition before
/// returning, so callers that serialize their input events never observe a
/// half-played turn.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    config: MatchConfig,
    current: Seat,
    phase: Phase,
    /// Accepted placements in the current game.
    moves: u32,
    /// (row, column) of the most recent placement.
    last_placed: Option<(u8, u8)>,
    /// The line that ended the game, once the phase is `Won`.
    winning_run: Option<Run>,
    /// Monotonic game counter (increments on restart).
    episode: u32,
}

impl GameState {
    /// Create a match from caller-supplied configuration.
    ///
    /// Validation happens here, before any match state exists; the board
    /// and the player pair then come to life together. `Seat::First` opens.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height),
            config,
            current: Seat::First,
            phase: Phase::InProgress,
            moves: 0,
            last_placed: None,
            winning_run: None,
            episode: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The seat to move. Meaningful only while the match is in progress.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// The player occupying the seat to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.config.players[seat.index()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_placed(&self) -> Option<(u8, u8)> {
        self.last_placed
    }

    pub fn winning_run(&self) -> Option<Run> {
        self.winning_run
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Columns that can still take a piece, in left-to-right order.
    ///
    /// This is the clickable set the input layer may offer the user; it is
    /// empty once the match is over.
    pub fn legal_columns(&self) -> LegalColumns {
        let mut columns = LegalColumns::new();
        if self.is_game_over() {
            return columns;
        }
        for column in 0..self.board.width() {
            if !self.board.is_column_full(column) {
                columns.push(column);
            }
        }
        columns
    }

    /// Play the current player's piece into `column`.
    ///
    /// One full turn, synchronously: landing-row lookup, placement, win
    /// scan, tie check, state transition. Rejected moves (`ColumnFull`,
    /// `GameOver`) leave the match completely untouched and are reported as
    /// values - they are expected game flow, not failures.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range; the input layer guarantees
    /// `0 <= column < width`.
    pub fn play_column(&mut self, column: u8) -> Result<Placement, Rejected> {
        if self.phase.is_terminal() {
            return Err(Rejected::GameOver);
        }

        let row = self.board.landing_row(column).ok_or(Rejected::ColumnFull)?;
        let seat = self.current;
        self.board.place(row, column, seat);
        self.moves += 1;
        self.last_placed = Some((row, column));

        // Only the mover can have completed a run with this placement.
        let outcome = if let Some(run) = find_winning_run(&self.board, seat) {
            self.phase = Phase::Won(seat);
            self.winning_run = Some(run);
            Outcome::Won(seat)
        } else if self.board.is_full() {
            self.phase = Phase::Tied;
            Outcome::Tied
        } else {
            self.current = seat.other();
            Outcome::Continue
        };

        Ok(Placement {
            row,
            column,
            outcome,
        })
    }

    /// Discard the match and start a fresh one with the same configuration.
    ///
    /// Board and turn state are rebuilt together - there is no partial
    /// reset. Only the episode counter survives.
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.width, self.config.height);
        self.current = Seat::First;
        self.phase = Phase::InProgress;
        self.moves = 0;
        self.last_placed = None;
        self.winning_run = None;
        self.episode = self.episode.wrapping_add(1);
    }

    /// Snapshot the state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            current: self.current,
            phase: self.phase,
            moves: self.moves,
            episode: self.episode,
            last_placed: self.last_placed,
            winning_run: self.winning_run,
            player_colors: [self.config.players[0].color, self.config.players[1].color],
            legal_columns: self.legal_columns(),
        }
    }
}
