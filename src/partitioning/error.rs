//! Partitioning errors for road-patches

use thiserror::Error;

use crate::network::{EdgeId, VertexId};
use crate::network_error::NetworkError;

/// Errors from configuration, coloring and patch-graph extraction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    /// Exploration budget must be a positive, finite number
    #[error("Invalid exploration range {0}: expected a positive finite value")]
    InvalidRange(f64),
    /// The input graph violates a structural precondition
    #[error("Malformed road graph: {0}")]
    Network(#[from] NetworkError),
    /// Extraction found a junction without patch
    #[error("Junction {0} has no patch assigned")]
    UncoloredJunction(VertexId),
    /// Extraction found a way without patch
    #[error("Way {0} has no patch assigned")]
    UncoloredWay(EdgeId),
    /// A patch graph whose patches or connections contradict each other
    #[error("Inconsistent patch graph: {0}")]
    InconsistentPatchGraph(String),
}
