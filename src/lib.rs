//! # road-patches
//!
//! road-patches splits a directed road network (junctions and ways) into
//! contiguous, travel-time bounded regions called *patches*. Patches are the
//! unit of work handed to simulation workers; partitioning runs once per
//! network before the simulation starts.
//!
//! ## Features
//! - Arena-backed [`RoadGraph`](network::RoadGraph) with index handles and
//!   structural validation
//! - Bounded cheapest-first exploration with pluggable distance metrics
//! - Growing-patch coloring with a pluggable single-patch merge policy
//! - Patch-graph extraction and partition quality metrics
//!
//! ## Determinism
//!
//! Patch identifiers and the random root of source-free networks come from
//! `SmallRng` streams. Set [`PartitionerConfig::rng_seed`](partitioning::PartitionerConfig)
//! to make a run reproducible; leave it unset for fresh identifiers per run.
//!
//! ## Usage
//!
//! ```rust
//! use road_patches::prelude::*;
//!
//! let mut graph = RoadGraph::new();
//! let a = graph.add_junction("a").unwrap();
//! let b = graph.add_junction("b").unwrap();
//! graph.add_way(a, b, Way::new(120.0, 13.9)).unwrap();
//!
//! let cfg = PartitionerConfig { rng_seed: Some(7), ..Default::default() };
//! let patches = partition(&mut graph, &cfg).unwrap();
//! assert_eq!(patches.patch_count(), 1);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod network;
pub mod network_error;
pub mod partitioning;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{BoundedExplorer, DistanceMetric, MetricKind, RangeBfs};
    pub use crate::network::{EdgeId, Junction, RoadGraph, VertexId, Way};
    pub use crate::network_error::NetworkError;
    pub use crate::partitioning::graph_traits::PatchableGraph;
    pub use crate::partitioning::{
        GrowingPatchPartitioner, PartitionError, PartitionerConfig, PatchGraph, PatchId,
        SingleColorStrategy, partition,
    };
}
