//! `VertexId` and `EdgeId`: strong index handles into a [`RoadGraph`](super::RoadGraph)
//!
//! Junctions and ways live in flat arenas owned by the graph. Everything else
//! (adjacency lists, exploration results, patch-graph members) refers to them
//! through these copyable handles, so there are no reference cycles between
//! ways and their endpoint junctions.

use std::fmt;

/// Handle of a junction (graph vertex).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(u32);

/// Handle of a way (directed graph edge).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EdgeId(u32);

impl VertexId {
    /// Wraps a raw arena index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        VertexId(raw)
    }

    /// Arena slot of this junction.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Wraps a raw arena index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        EdgeId(raw)
    }

    /// Arena slot of this way.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeId").field(&self.0).finish()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
