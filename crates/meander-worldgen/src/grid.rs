//! Chunk occupancy grid.

use meander_common::{CellCoord, Dimensions, GridError};

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Untouched terrain
    #[default]
    Empty,
    /// Part of the carved path
    Occupied,
}

/// Dense occupancy matrix for one chunk.
///
/// A grid starts with every cell [`CellState::Empty`] and is mutated only
/// by path carving. Every access is bounds-checked: an out-of-range
/// coordinate is a [`GridError::OutOfBounds`] contract violation, never a
/// silent no-op.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Grid extent
    dims: Dimensions,
    /// Cell states, indexed by [`CellCoord::to_index`]
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-empty grid of the given extent.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![CellState::Empty; dims.volume()],
        }
    }

    /// Returns the grid extent.
    #[must_use]
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: CellCoord) -> bool {
        self.dims.contains(coord)
    }

    /// Gets the state of a cell.
    pub fn get(&self, coord: CellCoord) -> Result<CellState, GridError> {
        self.cells
            .get(self.checked_index(coord)?)
            .copied()
            .ok_or(GridError::OutOfBounds {
                coord,
                dims: self.dims,
            })
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, coord: CellCoord, state: CellState) -> Result<(), GridError> {
        let index = self.checked_index(coord)?;
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = state;
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                dims: self.dims,
            })
        }
    }

    /// Returns whether the coordinate lies on the chunk boundary.
    ///
    /// Edge-ness is evaluated over the two ground-plane axes only; the
    /// depth axis never participates.
    #[must_use]
    pub const fn is_edge(&self, coord: CellCoord) -> bool {
        coord.x == 0
            || coord.x == self.dims.width - 1
            || coord.y == 0
            || coord.y == self.dims.height - 1
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == CellState::Occupied)
            .count()
    }

    /// Returns a slice of all cell states.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Bounds-checks a coordinate and converts it to a linear index.
    fn checked_index(&self, coord: CellCoord) -> Result<usize, GridError> {
        if self.dims.contains(coord) {
            Ok(coord.to_index(self.dims))
        } else {
            Err(GridError::OutOfBounds {
                coord,
                dims: self.dims,
            })
        }
    }
}
