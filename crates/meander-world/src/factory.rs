//! Boundary contracts with the hosting application.
//!
//! The core never spawns geometry or touches a scene graph. Everything
//! visual happens behind these two traits: a factory that materializes a
//! chunk at a placement, and a presenter that is told when a path cell is
//! revealed. Any implementation satisfying them works, whether an engine
//! binding, a test recorder, or nothing at all.

use meander_common::{CellCoord, ChunkHandle, ChunkId, FactoryError};
use meander_worldgen::ChunkPlacement;

/// Materializes chunks for the hosting application.
pub trait ChunkFactory {
    /// Creates the visual/structural representation of a chunk.
    ///
    /// Returns a handle the presenter can use to address the chunk later.
    /// Failure (for example a missing template asset) is
    /// [`FactoryError::AssetUnavailable`]; the core's own state is
    /// unaffected by it and the world simply stops chaining.
    fn create(
        &mut self,
        id: ChunkId,
        placement: &ChunkPlacement,
    ) -> Result<ChunkHandle, FactoryError>;
}

/// Receives reveal notifications for path cells.
pub trait CellPresenter {
    /// Called once per path cell, in path order, as the reveal sequence
    /// reaches it. Purely a notification; nothing is returned to the core.
    fn on_reveal(&mut self, chunk: ChunkHandle, cell: CellCoord);
}

/// A presenter that ignores every notification.
///
/// Useful for headless generation and tests that only care about the
/// terrain data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl CellPresenter for NullPresenter {
    fn on_reveal(&mut self, _chunk: ChunkHandle, _cell: CellCoord) {}
}
