//! Chunk placement and chaining.

use glam::Vec3;
use meander_common::Dimensions;
use serde::{Deserialize, Serialize};

use crate::exit::ExitDescriptor;

/// World-space description of where a chunk lives.
///
/// Produced by chaining and consumed by the external chunk factory; the
/// core never turns a placement into geometry itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkPlacement {
    /// World-space origin (minimum corner) of the chunk
    pub origin: Vec3,
    /// Chunk extent in cells
    pub dimensions: Dimensions,
}

impl ChunkPlacement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(origin: Vec3, dimensions: Dimensions) -> Self {
        Self { origin, dimensions }
    }

    /// Computes the placement of the chunk chained through the given exit.
    ///
    /// The origin moves by `sign * extent(axis) * spacing` along the exit
    /// axis; all other components are held unchanged. `spacing` is the
    /// world distance per cell and must be positive (validated at
    /// configuration time).
    #[must_use]
    pub fn chained(&self, spacing: f32, exit: ExitDescriptor) -> Self {
        let mut origin = self.origin;
        origin[exit.axis.index()] +=
            exit.sign.value() * exit.axis.extent(self.dimensions) as f32 * spacing;
        Self {
            origin,
            dimensions: self.dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::{ExitSign, PlaneAxis};

    #[test]
    fn test_chain_positive_x() {
        let placement = ChunkPlacement::new(Vec3::ZERO, Dimensions::new(13, 13, 2));
        let exit = ExitDescriptor::new(PlaneAxis::X, ExitSign::Positive);
        let next = placement.chained(1.0, exit);
        assert_eq!(next.origin, Vec3::new(13.0, 0.0, 0.0));
        assert_eq!(next.dimensions, placement.dimensions);
    }

    #[test]
    fn test_chain_negative_y_with_spacing() {
        let placement = ChunkPlacement::new(Vec3::new(5.0, 1.0, -2.0), Dimensions::new(4, 6, 1));
        let exit = ExitDescriptor::new(PlaneAxis::Y, ExitSign::Negative);
        let next = placement.chained(2.0, exit);
        assert_eq!(next.origin, Vec3::new(5.0, -11.0, -2.0));
    }

    #[test]
    fn test_chain_round_trip_returns_home() {
        let placement = ChunkPlacement::new(Vec3::new(3.0, 4.0, 0.0), Dimensions::new(7, 9, 1));
        let exit = ExitDescriptor::new(PlaneAxis::X, ExitSign::Negative);
        let there = placement.chained(1.5, exit);
        let back = there.chained(1.5, exit.opposite());
        assert_eq!(back.origin, placement.origin);
    }
}
