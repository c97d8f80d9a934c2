//! Error types for Meander operations.

use thiserror::Error;

use crate::coords::{CellCoord, Dimensions};

/// Top-level error type for Meander operations.
#[derive(Debug, Error)]
pub enum MeanderError {
    /// Grid access errors
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Path carving errors
    #[error("Carve error: {0}")]
    Carve(#[from] CarveError),

    /// Chunk factory errors
    #[error("Factory error: {0}")]
    Factory(#[from] FactoryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Grid access errors.
///
/// Out-of-range access is a contract violation and aborts the operation
/// that triggered it; it is never downgraded to a silent no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate component lies outside the grid extent
    #[error("cell {coord} outside grid {dims}")]
    OutOfBounds {
        /// Offending coordinate
        coord: CellCoord,
        /// Grid extent
        dims: Dimensions,
    },
}

/// Path carving errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarveError {
    /// Grid access failed during carving
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The walk exhausted every backtracking branch without reaching an
    /// edge. Only degenerate configurations can produce this; it signals a
    /// setup error and is never retried.
    #[error("carving exhausted {visited} cells of grid {dims} without reaching an edge")]
    GenerationDeadlock {
        /// Grid extent that deadlocked
        dims: Dimensions,
        /// Number of cells visited before exhaustion
        visited: usize,
    },

    /// The carve seed lies above the ground layer
    #[error("carve seed {seed} is not on the ground layer")]
    SeedOffPlane {
        /// Offending seed
        seed: CellCoord,
    },

    /// A path's terminal cell is not on a chunk boundary, so no exit
    /// direction can be resolved from it
    #[error("path terminal cell {last} is not on a chunk boundary")]
    UnresolvedExit {
        /// Terminal cell of the path
        last: CellCoord,
    },
}

/// Chunk factory errors.
///
/// Factory failures leave core state untouched; the world simply stops
/// chaining.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The factory could not materialize a chunk (e.g. a missing template
    /// asset)
    #[error("chunk asset unavailable: {0}")]
    AssetUnavailable(String),
}

/// Configuration errors, rejected before any carving begins.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A dimension component is zero
    #[error("invalid dimensions {dims}: every component must be at least 1")]
    InvalidDimensions {
        /// Offending extent
        dims: Dimensions,
    },

    /// Spacing is not a positive finite number
    #[error("invalid spacing {spacing}: must be positive")]
    InvalidSpacing {
        /// Offending spacing
        spacing: f32,
    },

    /// Reveal interval is negative or not finite
    #[error("invalid reveal interval {interval}: must be zero or positive")]
    InvalidInterval {
        /// Offending interval
        interval: f32,
    },
}

/// Result type alias for Meander operations.
pub type MeanderResult<T> = Result<T, MeanderError>;
