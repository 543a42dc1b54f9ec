//! Column cursor - turns game actions into validated column choices.
//!
//! The keyboard rendition of a clickable column-top row: the cursor tracks
//! a hovered column and yields a concrete column index when the player
//! drops a piece. Every yielded index is inside `0..width`, the bound the
//! engine trusts its callers to uphold.

use crate::types::GameAction;

/// Tracks the hovered column for keyboard play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCursor {
    column: u8,
    width: u8,
}

impl ColumnCursor {
    /// Create a cursor for a board `width` columns wide, hovering the
    /// center column.
    pub fn new(width: u8) -> Self {
        assert!(width > 0, "cursor needs at least one column");
        Self {
            column: width / 2,
            width,
        }
    }

    /// The hovered column.
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Feed an action; returns the chosen column when the action drops a
    /// piece.
    ///
    /// Movement saturates at the board edges. A digit pick beyond the last
    /// column is ignored, and a valid pick moves the hover and drops in one
    /// stroke, like clicking a column top directly.
    pub fn apply(&mut self, action: GameAction) -> Option<u8> {
        match action {
            GameAction::MoveLeft => {
                self.column = self.column.saturating_sub(1);
                None
            }
            GameAction::MoveRight => {
                if self.column + 1 < self.width {
                    self.column += 1;
                }
                None
            }
            GameAction::Drop => Some(self.column),
            GameAction::SelectColumn(column) => {
                if column < self.width {
                    self.column = column;
                    Some(column)
                } else {
                    None
                }
            }
            // Restart is match lifecycle, not a cursor concern.
            GameAction::Restart => None,
        }
    }

    /// Recenter the hover (used after a restart).
    pub fn reset(&mut self) {
        self.column = self.width / 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_the_center_column() {
        assert_eq!(ColumnCursor::new(7).column(), 3);
        assert_eq!(ColumnCursor::new(4).column(), 2);
        assert_eq!(ColumnCursor::new(1).column(), 0);
    }

    #[test]
    fn test_movement_saturates_at_the_edges() {
        let mut cursor = ColumnCursor::new(3);
        for _ in 0..5 {
            assert_eq!(cursor.apply(GameAction::MoveLeft), None);
        }
        assert_eq!(cursor.column(), 0);

        for _ in 0..5 {
            assert_eq!(cursor.apply(GameAction::MoveRight), None);
        }
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_drop_yields_the_hovered_column() {
        let mut cursor = ColumnCursor::new(7);
        cursor.apply(GameAction::MoveLeft);
        assert_eq!(cursor.apply(GameAction::Drop), Some(2));
        // Dropping again without moving targets the same column.
        assert_eq!(cursor.apply(GameAction::Drop), Some(2));
    }

    #[test]
    fn test_select_moves_the_hover_and_drops() {
        let mut cursor = ColumnCursor::new(7);
        assert_eq!(cursor.apply(GameAction::SelectColumn(6)), Some(6));
        assert_eq!(cursor.column(), 6);
    }

    #[test]
    fn test_select_beyond_the_board_is_ignored() {
        let mut cursor = ColumnCursor::new(4);
        assert_eq!(cursor.apply(GameAction::SelectColumn(4)), None);
        assert_eq!(cursor.apply(GameAction::SelectColumn(8)), None);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_yielded_columns_always_stay_in_bounds() {
        let mut cursor = ColumnCursor::new(5);
        let actions = [
            GameAction::MoveRight,
            GameAction::MoveRight,
            GameAction::MoveRight,
            GameAction::Drop,
            GameAction::SelectColumn(9),
            GameAction::SelectColumn(0),
            GameAction::MoveLeft,
            GameAction::Drop,
        ];
        for action in actions {
            if let Some(column) = cursor.apply(action) {
                assert!(column < 5);
            }
        }
    }

    #[test]
    fn test_reset_recenters_the_hover() {
        let mut cursor = ColumnCursor::new(7);
        cursor.apply(GameAction::SelectColumn(0));
        cursor.reset();
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_restart_action_leaves_the_cursor_alone() {
        let mut cursor = ColumnCursor::new(7);
        cursor.apply(GameAction::SelectColumn(5));
        assert_eq!(cursor.apply(GameAction::Restart), None);
        assert_eq!(cursor.column(), 5);
    }
}
