//! ID types for chunks and factory handles.

use serde::{Deserialize, Serialize};

/// Unique identifier for a chunk in a generated world.
///
/// Chunks form a single chain, so the world driver assigns IDs as an
/// increasing sequence starting at 1; `0` is reserved as the null ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkId(u64);

impl ChunkId {
    /// Null/invalid chunk ID.
    pub const NULL: Self = Self(0);

    /// Creates a chunk ID from a raw value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Checks if this is a valid (non-null) chunk ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns the ID of the chunk that follows this one in the chain.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk#{}", self.0)
    }
}

/// Opaque token a chunk factory returns for a created chunk.
///
/// The core never interprets the value; it only hands it back to the
/// presenter so the presenter can address the geometry it created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkHandle(u64);

impl ChunkHandle {
    /// Creates a handle from a raw value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_id_sequence() {
        let first = ChunkId::from_raw(1);
        assert!(first.is_valid());
        assert_eq!(first.successor(), ChunkId::from_raw(2));
        assert!(!ChunkId::NULL.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(ChunkId::from_raw(3).to_string(), "Chunk#3");
    }
}
