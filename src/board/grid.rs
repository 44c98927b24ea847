//! The board: line and box matrices.
//!
//! For a grid of `size` boxes per side there are `(size+1) x (size+1)` dots.
//! Horizontal line `(r, c)` joins dots `(r, c)` and `(r, c+1)`, so the
//! horizontal matrix is `(size+1)` rows by `size` columns. Vertical line
//! `(r, c)` joins dots `(r, c)` and `(r+1, c)`, so the vertical matrix is
//! `size` rows by `(size+1)` columns. Box `(r, c)` is bounded by:
//!
//! - top:    horizontal `(r, c)`
//! - bottom: horizontal `(r+1, c)`
//! - left:   vertical `(r, c)`
//! - right:  vertical `(r, c+1)`
//!
//! The board holds no move semantics. It exposes bounds-checked reads and
//! writes and the line-to-box adjacency; completion detection and turn logic
//! live in [`crate::rules`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveError, PlayerId, MAX_SIZE, MIN_SIZE};

/// Orientation of a drawable line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Horizontal,
    Vertical,
}

/// Coordinate of a box (unit cell) on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxCoord {
    pub row: usize,
    pub col: usize,
}

impl BoxCoord {
    /// Create a box coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for BoxCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box({}, {})", self.row, self.col)
    }
}

/// The three owner matrices for one board.
///
/// Cells are `None` until drawn/claimed. A drawn line keeps its owner for the
/// lifetime of the board; there is no erase or overwrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// `(size+1) x size` horizontal segments.
    horizontal: Vec<Vec<Option<PlayerId>>>,
    /// `size x (size+1)` vertical segments.
    vertical: Vec<Vec<Option<PlayerId>>>,
    /// `size x size` claimed boxes.
    boxes: Vec<Vec<Option<PlayerId>>>,
}

impl Grid {
    /// Allocate an empty board of `size` boxes per side.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "Grid size must be {MIN_SIZE}-{MAX_SIZE}"
        );

        Self {
            size,
            horizontal: vec![vec![None; size]; size + 1],
            vertical: vec![vec![None; size + 1]; size],
            boxes: vec![vec![None; size]; size],
        }
    }

    /// Grid size in boxes per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Matrix dimensions (rows, cols) for a line type.
    fn line_dims(&self, kind: LineKind) -> (usize, usize) {
        match kind {
            LineKind::Horizontal => (self.size + 1, self.size),
            LineKind::Vertical => (self.size, self.size + 1),
        }
    }

    fn line_in_bounds(&self, kind: LineKind, row: usize, col: usize) -> bool {
        let (rows, cols) = self.line_dims(kind);
        row < rows && col < cols
    }

    /// Read a line's owner.
    pub fn line(&self, kind: LineKind, row: usize, col: usize) -> Result<Option<PlayerId>, MoveError> {
        if !self.line_in_bounds(kind, row, col) {
            return Err(MoveError::OutOfBounds);
        }
        Ok(match kind {
            LineKind::Horizontal => self.horizontal[row][col],
            LineKind::Vertical => self.vertical[row][col],
        })
    }

    /// Draw a line for `player`.
    ///
    /// Fails with `OutOfBounds` or, if the cell already has an owner,
    /// `AlreadyDrawn` - a drawn line is never reassigned.
    pub fn draw_line(
        &mut self,
        kind: LineKind,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<(), MoveError> {
        if self.line(kind, row, col)?.is_some() {
            return Err(MoveError::AlreadyDrawn);
        }
        let cell = match kind {
            LineKind::Horizontal => &mut self.horizontal[row][col],
            LineKind::Vertical => &mut self.vertical[row][col],
        };
        *cell = Some(player);
        Ok(())
    }

    /// Read a box's owner.
    pub fn box_owner(&self, row: usize, col: usize) -> Result<Option<PlayerId>, MoveError> {
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfBounds);
        }
        Ok(self.boxes[row][col])
    }

    /// Assign a box to `player`. A claimed box is never reassigned.
    pub fn claim_box(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), MoveError> {
        if self.box_owner(row, col)?.is_some() {
            return Err(MoveError::AlreadyDrawn);
        }
        self.boxes[row][col] = Some(player);
        Ok(())
    }

    /// The 0-2 boxes bordering a line, in fixed {above/left, below/right}
    /// order. Empty for out-of-range coordinates.
    #[must_use]
    pub fn neighboring_boxes(&self, kind: LineKind, row: usize, col: usize) -> SmallVec<[BoxCoord; 2]> {
        let mut neighbors = SmallVec::new();
        if !self.line_in_bounds(kind, row, col) {
            return neighbors;
        }

        match kind {
            LineKind::Horizontal => {
                // Box above, unless this is the top edge of the board.
                if row > 0 {
                    neighbors.push(BoxCoord::new(row - 1, col));
                }
                // Box below, unless this is the bottom edge.
                if row < self.size {
                    neighbors.push(BoxCoord::new(row, col));
                }
            }
            LineKind::Vertical => {
                // Box to the left, unless this is the left edge.
                if col > 0 {
                    neighbors.push(BoxCoord::new(row, col - 1));
                }
                // Box to the right, unless this is the right edge.
                if col < self.size {
                    neighbors.push(BoxCoord::new(row, col));
                }
            }
        }

        neighbors
    }

    /// The four lines bounding a box: top, bottom, left, right.
    #[must_use]
    pub fn box_sides(coord: BoxCoord) -> [(LineKind, usize, usize); 4] {
        let BoxCoord { row, col } = coord;
        [
            (LineKind::Horizontal, row, col),
            (LineKind::Horizontal, row + 1, col),
            (LineKind::Vertical, row, col),
            (LineKind::Vertical, row, col + 1),
        ]
    }

    /// Whether all four sides of a box are drawn.
    ///
    /// `coord` must be a valid box coordinate (as returned by
    /// [`Grid::neighboring_boxes`]).
    #[must_use]
    pub fn box_complete(&self, coord: BoxCoord) -> bool {
        Self::box_sides(coord)
            .iter()
            .all(|&(kind, row, col)| matches!(self.line(kind, row, col), Ok(Some(_))))
    }

    /// Number of boxes without an owner.
    #[must_use]
    pub fn unclaimed_boxes(&self) -> usize {
        self.boxes
            .iter()
            .flatten()
            .filter(|owner| owner.is_none())
            .count()
    }

    /// Count of boxes owned by `player`.
    #[must_use]
    pub fn boxes_owned_by(&self, player: PlayerId) -> usize {
        self.boxes
            .iter()
            .flatten()
            .filter(|owner| **owner == Some(player))
            .count()
    }

    /// Read-only view of the horizontal line matrix.
    #[must_use]
    pub fn horizontal_lines(&self) -> &[Vec<Option<PlayerId>>] {
        &self.horizontal
    }

    /// Read-only view of the vertical line matrix.
    #[must_use]
    pub fn vertical_lines(&self) -> &[Vec<Option<PlayerId>>] {
        &self.vertical
    }

    /// Read-only view of the box matrix.
    #[must_use]
    pub fn boxes(&self) -> &[Vec<Option<PlayerId>>] {
        &self.boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_new_grid_dimensions() {
        let grid = Grid::new(3);

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.horizontal_lines().len(), 4);
        assert_eq!(grid.horizontal_lines()[0].len(), 3);
        assert_eq!(grid.vertical_lines().len(), 3);
        assert_eq!(grid.vertical_lines()[0].len(), 4);
        assert_eq!(grid.boxes().len(), 3);
        assert_eq!(grid.boxes()[0].len(), 3);
        assert_eq!(grid.unclaimed_boxes(), 9);
    }

    #[test]
    #[should_panic(expected = "Grid size must be")]
    fn test_new_grid_rejects_bad_size() {
        Grid::new(2);
    }

    #[test]
    fn test_draw_and_read_line() {
        let mut grid = Grid::new(3);

        assert_eq!(grid.line(LineKind::Horizontal, 0, 0), Ok(None));
        grid.draw_line(LineKind::Horizontal, 0, 0, P1).unwrap();
        assert_eq!(grid.line(LineKind::Horizontal, 0, 0), Ok(Some(P1)));
    }

    #[test]
    fn test_line_never_overwritten() {
        let mut grid = Grid::new(3);

        grid.draw_line(LineKind::Vertical, 1, 2, P1).unwrap();
        assert_eq!(
            grid.draw_line(LineKind::Vertical, 1, 2, P2),
            Err(MoveError::AlreadyDrawn)
        );
        assert_eq!(grid.line(LineKind::Vertical, 1, 2), Ok(Some(P1)));
    }

    #[test]
    fn test_line_bounds_per_kind() {
        let mut grid = Grid::new(3);

        // Horizontal: 4 rows x 3 cols.
        assert!(grid.draw_line(LineKind::Horizontal, 3, 2, P1).is_ok());
        assert_eq!(
            grid.draw_line(LineKind::Horizontal, 4, 0, P1),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            grid.draw_line(LineKind::Horizontal, 0, 3, P1),
            Err(MoveError::OutOfBounds)
        );

        // Vertical: 3 rows x 4 cols.
        assert!(grid.draw_line(LineKind::Vertical, 2, 3, P1).is_ok());
        assert_eq!(
            grid.draw_line(LineKind::Vertical, 3, 0, P1),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            grid.draw_line(LineKind::Vertical, 0, 4, P1),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn test_box_bounds() {
        let mut grid = Grid::new(3);

        assert_eq!(grid.box_owner(2, 2), Ok(None));
        assert_eq!(grid.box_owner(3, 0), Err(MoveError::OutOfBounds));
        assert_eq!(grid.box_owner(0, 3), Err(MoveError::OutOfBounds));
        assert_eq!(grid.claim_box(3, 3, P1), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_claim_box_once() {
        let mut grid = Grid::new(3);

        grid.claim_box(1, 1, P1).unwrap();
        assert_eq!(grid.box_owner(1, 1), Ok(Some(P1)));
        assert_eq!(grid.claim_box(1, 1, P2), Err(MoveError::AlreadyDrawn));
        assert_eq!(grid.boxes_owned_by(P1), 1);
        assert_eq!(grid.unclaimed_boxes(), 8);
    }

    #[test]
    fn test_neighboring_boxes_horizontal() {
        let grid = Grid::new(3);

        // Top edge: only the box below.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Horizontal, 0, 1).as_slice(),
            &[BoxCoord::new(0, 1)]
        );
        // Interior row: above then below.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Horizontal, 1, 1).as_slice(),
            &[BoxCoord::new(0, 1), BoxCoord::new(1, 1)]
        );
        // Bottom edge: only the box above.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Horizontal, 3, 1).as_slice(),
            &[BoxCoord::new(2, 1)]
        );
    }

    #[test]
    fn test_neighboring_boxes_vertical() {
        let grid = Grid::new(3);

        // Left edge: only the box to the right.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Vertical, 1, 0).as_slice(),
            &[BoxCoord::new(1, 0)]
        );
        // Interior column: left then right.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Vertical, 1, 2).as_slice(),
            &[BoxCoord::new(1, 1), BoxCoord::new(1, 2)]
        );
        // Right edge: only the box to the left.
        assert_eq!(
            grid.neighboring_boxes(LineKind::Vertical, 1, 3).as_slice(),
            &[BoxCoord::new(1, 2)]
        );
    }

    #[test]
    fn test_neighboring_boxes_out_of_range() {
        let grid = Grid::new(3);
        assert!(grid.neighboring_boxes(LineKind::Horizontal, 9, 9).is_empty());
    }

    #[test]
    fn test_box_complete() {
        let mut grid = Grid::new(3);
        let target = BoxCoord::new(0, 0);

        assert!(!grid.box_complete(target));
        grid.draw_line(LineKind::Horizontal, 0, 0, P1).unwrap();
        grid.draw_line(LineKind::Vertical, 0, 0, P2).unwrap();
        grid.draw_line(LineKind::Vertical, 0, 1, P1).unwrap();
        assert!(!grid.box_complete(target));

        grid.draw_line(LineKind::Horizontal, 1, 0, P2).unwrap();
        assert!(grid.box_complete(target));
    }

    #[test]
    fn test_box_sides_mapping() {
        let sides = Grid::box_sides(BoxCoord::new(1, 2));
        assert_eq!(sides[0], (LineKind::Horizontal, 1, 2)); // top
        assert_eq!(sides[1], (LineKind::Horizontal, 2, 2)); // bottom
        assert_eq!(sides[2], (LineKind::Vertical, 1, 2)); // left
        assert_eq!(sides[3], (LineKind::Vertical, 1, 3)); // right
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut grid = Grid::new(4);
        grid.draw_line(LineKind::Horizontal, 2, 1, P1).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
