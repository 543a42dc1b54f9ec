//! Render-facing snapshot of a match.
//!
//! The term crate draws from a snapshot, never from live state, keeping the
//! renderer free of any dependency on engine internals.

use crate::game_state::LegalColumns;
use crate::types::{Cell, Phase, Rgb, Run, Seat};

/// Plain-data view of a match, taken by [`GameState::snapshot`](crate::GameState::snapshot).
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major cells, top row first.
    pub cells: Vec<Cell>,
    pub current: Seat,
    pub phase: Phase,
    pub moves: u32,
    pub episode: u32,
    /// (row, column) of the most recent placement.
    pub last_placed: Option<(u8, u8)>,
    pub winning_run: Option<Run>,
    /// Disc colors by seat index.
    pub player_colors: [Rgb; 2],
    pub legal_columns: LegalColumns,
}

impl GameSnapshot {
    /// Cell at (column, row); `None` outside the grid.
    pub fn cell(&self, column: u8, row: u8) -> Option<Cell> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[(row as usize) * (self.width as usize) + (column as usize)])
    }

    /// Disc color assigned to a seat.
    pub fn seat_color(&self, seat: Seat) -> Rgb {
        self.player_colors[seat.index()]
    }

    /// Whether (column, row) belongs to the winning run.
    pub fn is_winning_cell(&self, column: u8, row: u8) -> bool {
        self.winning_run
            .map_or(false, |run| run.iter().any(|&(r, c)| r == row && c == column))
    }

    /// Whether a piece can still be dropped into `column`.
    pub fn is_column_playable(&self, column: u8) -> bool {
        self.legal_columns.contains(&column)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MatchConfig;
    use crate::game_state::GameState;
    use crate::types::{Phase, Seat};

    #[test]
    fn test_cell_lookup_matches_board_layout() {
        let mut game = GameState::new(MatchConfig::default()).unwrap();
        game.play_column(0).unwrap();
        game.play_column(6).unwrap();

        let snap = game.snapshot();
        assert_eq!(snap.cell(0, 5), Some(Some(Seat::First)));
        assert_eq!(snap.cell(6, 5), Some(Some(Seat::Second)));
        assert_eq!(snap.cell(3, 3), Some(None));
        assert_eq!(snap.cell(7, 0), None);
    }

    #[test]
    fn test_winning_cells_are_flagged_after_a_win() {
        let mut game = GameState::new(MatchConfig {
            width: 4,
            height: 4,
            ..Default::default()
        })
        .unwrap();
        for column in [0, 0, 1, 1, 2, 2, 3] {
            game.play_column(column).unwrap();
        }

        let snap = game.snapshot();
        assert_eq!(snap.phase, Phase::Won(Seat::First));
        for column in 0..4 {
            assert!(snap.is_winning_cell(column, 3));
            assert!(!snap.is_winning_cell(column, 2));
        }
        assert!(!snap.is_column_playable(1));
    }

    #[test]
    fn test_playable_columns_follow_legal_columns() {
        let mut game = GameState::new(MatchConfig {
            width: 4,
            height: 4,
            ..Default::default()
        })
        .unwrap();
        for _ in 0..4 {
            game.play_column(2).unwrap();
        }

        let snap = game.snapshot();
        assert!(snap.is_column_playable(0));
        assert!(!snap.is_column_playable(2));
    }
}
