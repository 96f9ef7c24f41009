//! Plane geometry, placement validation and selection inference.

use std::fmt;

use crate::common::{Cell, PlacementError};
use crate::config::PLANE_CELLS;
use crate::grid::{Grid8, Marker};

/// Direction the plane's nose points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

/// Cabin-relative offsets for a plane pointing up: nose, wing row, body,
/// tail row. Down uses the same table with the sign flipped.
const VERTICAL_OFFSETS: [(i8, i8); PLANE_CELLS] = [
    (0, 0),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (3, -1),
    (3, 0),
    (3, 1),
];

/// The 90°-rotated table used by left/right, row and column roles swapped.
const HORIZONTAL_OFFSETS: [(i8, i8); PLANE_CELLS] = [
    (0, 0),
    (-2, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
    (2, 1),
    (0, 2),
    (-1, 3),
    (0, 3),
    (1, 3),
];

impl Orientation {
    /// All orientations, in the order selection inference tries them.
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    fn offsets(self) -> &'static [(i8, i8); PLANE_CELLS] {
        match self {
            Orientation::Up | Orientation::Down => &VERTICAL_OFFSETS,
            Orientation::Left | Orientation::Right => &HORIZONTAL_OFFSETS,
        }
    }

    fn sign(self) -> i8 {
        match self {
            Orientation::Up | Orientation::Left => 1,
            Orientation::Down | Orientation::Right => -1,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Right => "right",
        };
        f.write_str(s)
    }
}

/// A ten-cell plane anchored at its cabin.
///
/// The occupied cells are cached at construction, cabin first. They may lie
/// off the board; [`Plane::validate`] decides whether the plane fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plane {
    cabin: Cell,
    orientation: Orientation,
    cells: [Cell; PLANE_CELLS],
}

impl Plane {
    /// Build the plane anchored at `cabin` with its nose pointing
    /// `orientation`.
    pub fn new(cabin: Cell, orientation: Orientation) -> Self {
        let sign = orientation.sign();
        let offsets = orientation.offsets();
        let cells = std::array::from_fn(|i| cabin.offset(offsets[i], sign));
        Plane {
            cabin,
            orientation,
            cells,
        }
    }

    pub fn cabin(&self) -> Cell {
        self.cabin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The ten cells the plane occupies, cabin first.
    pub fn cells(&self) -> &[Cell; PLANE_CELLS] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Check that the plane fits on `board`: cabin in range, every cell in
    /// range, no cell already occupied. Never mutates the board.
    pub fn validate(&self, board: &Grid8) -> Result<(), PlacementError> {
        if !self.cabin.in_bounds() {
            return Err(PlacementError::InvalidCabin(self.cabin));
        }
        for &cell in &self.cells {
            if !cell.in_bounds() {
                return Err(PlacementError::OutsidePlayingArea(cell));
            }
            if board.get(cell)? == Marker::Plane {
                return Err(PlacementError::OverlapsExistingPlane(cell));
            }
        }
        Ok(())
    }

    /// Recover a plane from an unordered ten-cell selection.
    ///
    /// Tries orientations in [`Orientation::ALL`] order and candidate
    /// cabins in selection order, accepting the first combination whose
    /// generated cells equal the selection as a set. The silhouette pins
    /// the match down uniquely for any valid selection; the fixed order
    /// only makes behavior reproducible for inputs that never match.
    pub fn from_selection(selected: &[Cell]) -> Result<Plane, PlacementError> {
        if selected.len() != PLANE_CELLS {
            return Err(PlacementError::WrongSelectionSize(selected.len()));
        }
        let mut wanted = selected.to_vec();
        wanted.sort_unstable();
        for orientation in Orientation::ALL {
            for &cabin in selected {
                let candidate = Plane::new(cabin, orientation);
                let mut cells = candidate.cells;
                cells.sort_unstable();
                if cells.as_slice() == wanted.as_slice() {
                    return Ok(candidate);
                }
            }
        }
        Err(PlacementError::UnmatchedSelection)
    }
}
