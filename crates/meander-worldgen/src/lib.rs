//! # Meander Worldgen
//!
//! The procedural-generation core for Meander.
//!
//! This crate carves a single connected path through a chunk's occupancy
//! grid via a randomized, backtracking depth-first walk, classifies the
//! boundary the path exits through, and computes where the next chunk in
//! the chain belongs:
//! - Occupancy grids with bounds-checked access
//! - Boundary-seeking path carving (seedable, reproducible)
//! - Exit-direction resolution with deterministic tie-break
//! - Chunk placement chaining
//!
//! Everything here is synchronous, single-threaded computation over one
//! chunk's grid; time-phased reveal lives in `meander-world`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod carver;
pub mod chain;
pub mod exit;
pub mod grid;
pub mod path;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::carver::*;
    pub use crate::chain::*;
    pub use crate::exit::*;
    pub use crate::grid::*;
    pub use crate::path::*;
}

pub use prelude::*;
