//! Generated chunk records.

use meander_common::{ChunkHandle, ChunkId};
use meander_worldgen::{ChunkPlacement, Grid, Path};

/// A generated chunk: its placement, occupancy grid, and carved path.
///
/// Each chunk exclusively owns its grid and path; the only relation
/// between chunks is the spatial one implied by chaining, so there are no
/// cross-chunk references to invalidate.
#[derive(Debug)]
pub struct Chunk {
    /// Identity assigned by the world driver
    id: ChunkId,
    /// Token minted by the external factory
    handle: ChunkHandle,
    /// Where the chunk lives in world space
    placement: ChunkPlacement,
    /// Occupancy after carving
    grid: Grid,
    /// The carved path
    path: Path,
}

impl Chunk {
    /// Creates a chunk record.
    #[must_use]
    pub fn new(
        id: ChunkId,
        handle: ChunkHandle,
        placement: ChunkPlacement,
        grid: Grid,
        path: Path,
    ) -> Self {
        Self {
            id,
            handle,
            placement,
            grid,
            path,
        }
    }

    /// Returns the chunk ID.
    #[must_use]
    pub const fn id(&self) -> ChunkId {
        self.id
    }

    /// Returns the factory handle for this chunk.
    #[must_use]
    pub const fn handle(&self) -> ChunkHandle {
        self.handle
    }

    /// Returns the world-space placement.
    #[must_use]
    pub const fn placement(&self) -> ChunkPlacement {
        self.placement
    }

    /// Returns the occupancy grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the carved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use meander_common::{CellCoord, Dimensions};
    use meander_worldgen::PathCarver;

    #[test]
    fn test_chunk_owns_its_terrain() {
        let dims = Dimensions::new(5, 5, 1);
        let mut grid = Grid::new(dims);
        let path = PathCarver::with_seed(42)
            .carve(&mut grid, CellCoord::ground(2, 2))
            .expect("carve succeeds");
        let path_len = path.len();

        let chunk = Chunk::new(
            ChunkId::from_raw(1),
            ChunkHandle::from_raw(10),
            ChunkPlacement::new(Vec3::ZERO, dims),
            grid,
            path,
        );
        assert_eq!(chunk.id(), ChunkId::from_raw(1));
        assert_eq!(chunk.grid().occupied_count(), path_len);
        assert_eq!(chunk.path().len(), path_len);
    }
}
