//! # Meander Common
//!
//! Common types, utilities, and shared abstractions for Meander.
//!
//! This crate provides foundational types used across all Meander
//! subsystems:
//! - Chunk extents and cell coordinates
//! - ID types (ChunkId, ChunkHandle)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_seed_is_interior() {
        let dims = Dimensions::new(13, 13, 2);
        let seed = dims.plane_center();
        assert!(dims.contains(seed));
        assert_eq!(seed.z, 0);
    }

    #[test]
    fn test_default_chunk_volume_bounds_path_length() {
        let dims = Dimensions::new(13, 13, 2);
        assert!(dims.volume() >= dims.width as usize * dims.height as usize);
    }
}
