//! Boundary-seeking path carving.
//!
//! The carver performs a randomized depth-first walk over a chunk's ground
//! layer, starting at an interior seed cell and terminating on the first
//! boundary cell it reaches. Dead ends backtrack along an explicit stack,
//! which makes the walk total: every cell is visited at most once, so the
//! walk either reaches an edge or exhausts the grid and reports
//! [`CarveError::GenerationDeadlock`].

use meander_common::{CarveError, CellCoord, GridError};
use tracing::debug;

use crate::grid::{CellState, Grid};
use crate::path::Path;

/// Carves paths through chunk grids via randomized depth-first walk.
///
/// Randomness is injectable: a carver built with [`PathCarver::with_seed`]
/// produces identical paths for identical grids and seed cells, which is
/// what makes generation reproducible.
#[derive(Debug)]
pub struct PathCarver {
    rng: fastrand::Rng,
}

impl PathCarver {
    /// Creates a carver seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a carver with a fixed RNG seed for reproducible carving.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Carves a path from `seed` to the chunk boundary, marking every path
    /// cell [`CellState::Occupied`] in the grid.
    ///
    /// The seed must be in bounds and on the ground layer (`z == 0`). A
    /// seed that already lies on the boundary yields the trivial
    /// single-cell path without entering the walk.
    pub fn carve(&mut self, grid: &mut Grid, seed: CellCoord) -> Result<Path, CarveError> {
        let dims = grid.dims();
        if !grid.in_bounds(seed) {
            return Err(GridError::OutOfBounds { coord: seed, dims }.into());
        }
        if seed.z != 0 {
            return Err(CarveError::SeedOffPlane { seed });
        }

        let mut visited = vec![false; dims.volume()];
        visited[seed.to_index(dims)] = true;
        let mut visited_count = 1usize;
        let mut stack = vec![seed];

        loop {
            let Some(&current) = stack.last() else {
                // Every reachable cell was tried and none touched an edge.
                return Err(CarveError::GenerationDeadlock {
                    dims,
                    visited: visited_count,
                });
            };

            if grid.is_edge(current) {
                for &cell in &stack {
                    grid.set(cell, CellState::Occupied)?;
                }
                debug!(
                    "carved path of {} cells from {} to {}",
                    stack.len(),
                    seed,
                    current
                );
                return Ok(Path::new(stack));
            }

            let mut candidates = [CellCoord::ground(0, 0); 4];
            let mut count = 0;
            for neighbor in plane_neighbors(current) {
                if dims.contains(neighbor) && !visited[neighbor.to_index(dims)] {
                    candidates[count] = neighbor;
                    count += 1;
                }
            }

            if count == 0 {
                // Dead end; resume from the previous cell.
                stack.pop();
            } else {
                let next = candidates[self.rng.usize(..count)];
                visited[next.to_index(dims)] = true;
                visited_count += 1;
                stack.push(next);
            }
        }
    }
}

impl Default for PathCarver {
    fn default() -> Self {
        Self::new()
    }
}

/// The 4-connected neighbors of a cell within its ground layer.
///
/// Components wrap below zero; the wrapped coordinate (like the far
/// bound) is rejected by the caller's bounds check.
fn plane_neighbors(cell: CellCoord) -> [CellCoord; 4] {
    [
        CellCoord::new(cell.x.wrapping_sub(1), cell.y, cell.z),
        CellCoord::new(cell.x + 1, cell.y, cell.z),
        CellCoord::new(cell.x, cell.y.wrapping_sub(1), cell.z),
        CellCoord::new(cell.x, cell.y + 1, cell.z),
    ]
}
