//! NetworkError: construction and consistency errors of the road graph
//!
//! Every public operation that can be handed malformed input returns this
//! error instead of panicking. The partitioner treats any of these as a
//! precondition violation and refuses to start.

use crate::network::{EdgeId, VertexId};
use thiserror::Error;

/// Errors raised while building or validating a [`RoadGraph`](crate::network::RoadGraph).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    /// A junction with this key is already present.
    #[error("Duplicate junction key `{0}`")]
    DuplicateJunction(String),
    /// No junction is registered under this key.
    #[error("Unknown junction key `{0}`")]
    UnknownJunction(String),
    /// A handle points past the end of the junction arena.
    #[error("Junction {0} does not exist in the graph")]
    MissingJunction(VertexId),
    /// A way references an endpoint that is absent from the graph.
    #[error("Way {edge} references missing junction {vertex}")]
    DanglingWay { edge: EdgeId, vertex: VertexId },
    /// Adjacency lists disagree with the recorded way endpoints.
    #[error("Adjacency of junction {vertex} is inconsistent with way {edge}")]
    AdjacencyMismatch { vertex: VertexId, edge: EdgeId },
    /// The key index does not point back at the junction carrying the key.
    #[error("Key index entry `{0}` does not match its junction")]
    KeyIndexMismatch(String),
    /// Way attributes unusable as a traversal cost.
    #[error("Invalid way attributes: length {length}, max speed {max_speed}")]
    InvalidWay { length: f64, max_speed: f64 },
    /// Arena outgrew the 32-bit handle space.
    #[error("Road graph exceeds {0} elements")]
    CapacityExceeded(u32),
}
