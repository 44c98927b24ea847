//! Move application: the single entry point that mutates a board.
//!
//! A move draws one line. The line's 0-2 neighboring boxes are then examined;
//! any box whose fourth side was just closed is claimed for the mover. Since
//! a line borders at most two boxes, a single move completes at most two.

use smallvec::SmallVec;

use crate::board::{BoxCoord, Grid, LineKind};
use crate::core::{MoveError, PlayerId};

/// Draw a line for `player` and claim any boxes it completes.
///
/// Returns the claimed box coordinates in fixed {above/left, below/right}
/// order. On any validation failure the board is left untouched; the only
/// mutation point is the single `draw_line` call, so there is no partial
/// state to roll back.
///
/// Completion is judged after the line is set: a box is complete when all
/// four of its sides are drawn, the just-set line included.
pub fn apply_move(
    grid: &mut Grid,
    kind: LineKind,
    row: usize,
    col: usize,
    player: PlayerId,
) -> Result<SmallVec<[BoxCoord; 2]>, MoveError> {
    grid.draw_line(kind, row, col, player)?;

    let mut completed = SmallVec::new();
    for candidate in grid.neighboring_boxes(kind, row, col) {
        if grid.box_complete(candidate) {
            // Cannot fail: the candidate is in bounds and was incomplete
            // (hence unclaimed) before this line was drawn.
            grid.claim_box(candidate.row, candidate.col, player)?;
            completed.push(candidate);
        }
    }

    Ok(completed)
}
