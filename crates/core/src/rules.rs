//! Win detection - finds a four-in-a-row run for a single seat.
//!
//! Every cell is treated as a candidate run start and scanned in row-major
//! order (row ascending, then column ascending within the row). Four runs
//! are tried per cell, in a fixed direction order, and the first complete
//! run ends the scan. The scan only ever looks at one seat's pieces: after
//! a move, only the mover can have completed a run.

use crate::board::Board;
use crate::types::{Run, Seat, RUN_LENGTH};

/// Candidate run directions as (row step, column step), in check order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find the first winning run for `seat`, if any.
///
/// Returns the run's four (row, column) coordinates so the render layer can
/// highlight the line. O(width x height): each candidate cell does constant
/// work (4 directions x 4 cells).
pub fn find_winning_run(board: &Board, seat: Seat) -> Option<Run> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for &(row_step, col_step) in &RUN_DIRECTIONS {
                if let Some(run) = run_from(board, seat, row, column, row_step, col_step) {
                    return Some(run);
                }
            }
        }
    }
    None
}

/// Check the run of `RUN_LENGTH` cells starting at (row, column) and
/// stepping by (row_step, col_step). The run wins iff every coordinate is
/// within the grid and every cell holds `seat`.
fn run_from(
    board: &Board,
    seat: Seat,
    row: u8,
    column: u8,
    row_step: i16,
    col_step: i16,
) -> Option<Run> {
    let height = board.height() as i16;
    let width = board.width() as i16;

    let mut run = [(0u8, 0u8); RUN_LENGTH];
    for (i, slot) in run.iter_mut().enumerate() {
        let r = row as i16 + row_step * i as i16;
        let c = column as i16 + col_step * i as i16;
        if r < 0 || r >= height || c < 0 || c >= width {
            return None;
        }
        if board.get(c as u8, r as u8) != Some(Some(seat)) {
            return None;
        }
        *slot = (r as u8, c as u8);
    }
    Some(run)
}
