//! Chunk extents and cell coordinates.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Extent of a chunk in cells along each axis.
///
/// The carved "ground plane" spans `width × height`; `depth` is the number
/// of vertical layers a chunk carries. All components must be at least 1
/// for generation to make sense (see [`Dimensions::volume`] for the cell
/// count bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Dimensions {
    /// Extent along the X axis (first ground-plane axis)
    pub width: u32,
    /// Extent along the Y axis (second ground-plane axis)
    pub height: u32,
    /// Extent along the Z axis (vertical layers; not walkable space)
    pub depth: u32,
}

impl Dimensions {
    /// Creates a new extent triple.
    #[must_use]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total number of cells in a chunk of this extent.
    ///
    /// This is also the upper bound on the length of any carved path.
    #[must_use]
    pub const fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Returns whether all components are at least 1.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width >= 1 && self.height >= 1 && self.depth >= 1
    }

    /// Returns whether the given coordinate lies inside this extent.
    #[must_use]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.x < self.width && coord.y < self.height && coord.z < self.depth
    }

    /// Center cell of the ground plane (the default carve seed).
    #[must_use]
    pub const fn plane_center(&self) -> CellCoord {
        CellCoord::ground(self.width / 2, self.height / 2)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Cell coordinate within a chunk.
///
/// Components index `[0, width) × [0, height) × [0, depth)` and are never
/// negative by construction. Path cells always have `z == 0` (the ground
/// layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct CellCoord {
    /// X coordinate within the chunk
    pub x: u32,
    /// Y coordinate within the chunk
    pub y: u32,
    /// Z coordinate (layer) within the chunk
    pub z: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Creates a ground-layer coordinate (`z == 0`).
    #[must_use]
    pub const fn ground(x: u32, y: u32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Converts to a linear index for dense array access.
    ///
    /// Layout is row-major within a layer, layers stacked last. Callers
    /// must ensure the coordinate lies inside `dims`; presenters that keep
    /// flat cell arrays index them with this.
    #[must_use]
    pub const fn to_index(self, dims: Dimensions) -> usize {
        (self.z as usize * dims.height as usize + self.y as usize) * dims.width as usize
            + self.x as usize
    }

    /// Creates from a linear index.
    #[must_use]
    pub const fn from_index(index: usize, dims: Dimensions) -> Self {
        let plane = dims.width as usize * dims.height as usize;
        let layer = index % plane;
        Self {
            x: (layer % dims.width as usize) as u32,
            y: (layer / dims.width as usize) as u32,
            z: (index / plane) as u32,
        }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        assert_eq!(Dimensions::new(13, 13, 2).volume(), 338);
        assert_eq!(Dimensions::new(1, 1, 1).volume(), 1);
    }

    #[test]
    fn test_validity() {
        assert!(Dimensions::new(1, 1, 1).is_valid());
        assert!(!Dimensions::new(0, 5, 1).is_valid());
        assert!(!Dimensions::new(5, 0, 1).is_valid());
        assert!(!Dimensions::new(5, 5, 0).is_valid());
    }

    #[test]
    fn test_contains() {
        let dims = Dimensions::new(5, 5, 1);
        assert!(dims.contains(CellCoord::ground(0, 0)));
        assert!(dims.contains(CellCoord::ground(4, 4)));
        assert!(!dims.contains(CellCoord::ground(5, 0)));
        assert!(!dims.contains(CellCoord::new(0, 0, 1)));
    }

    #[test]
    fn test_plane_center() {
        assert_eq!(Dimensions::new(13, 13, 2).plane_center(), CellCoord::ground(6, 6));
        assert_eq!(Dimensions::new(5, 5, 1).plane_center(), CellCoord::ground(2, 2));
        assert_eq!(Dimensions::new(1, 1, 1).plane_center(), CellCoord::ground(0, 0));
    }

    #[test]
    fn test_index_round_trip() {
        let dims = Dimensions::new(13, 13, 2);
        let coord = CellCoord::new(7, 3, 1);
        let index = coord.to_index(dims);
        assert_eq!(CellCoord::from_index(index, dims), coord);
    }

    #[test]
    fn test_index_layout() {
        let dims = Dimensions::new(4, 3, 2);
        assert_eq!(CellCoord::ground(0, 0).to_index(dims), 0);
        assert_eq!(CellCoord::ground(1, 0).to_index(dims), 1);
        assert_eq!(CellCoord::ground(0, 1).to_index(dims), 4);
        assert_eq!(CellCoord::new(0, 0, 1).to_index(dims), 12);
    }
}
