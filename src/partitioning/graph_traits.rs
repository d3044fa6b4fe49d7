// Graph trait abstraction for patch coloring
use crate::network::{EdgeId, RoadGraph, VertexId, Way, validate_road_graph};
use crate::network_error::NetworkError;
use crate::partitioning::patch_id::PatchId;

/// Capabilities the growing-patch partitioner needs from a road network.
///
/// Handles passed to the per-element accessors must come from this graph;
/// implementors may panic on foreign handles. Call
/// [`check_well_formed`](Self::check_well_formed) first when the graph came
/// from an untrusted source.
pub trait PatchableGraph {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// All junctions, in a stable order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// All ways, in a stable order.
    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_;

    /// Ways ending at `v`.
    fn incoming(&self, v: VertexId) -> &[EdgeId];

    /// Ways leaving `v`, in adjacency order.
    fn outgoing(&self, v: VertexId) -> &[EdgeId];

    fn source(&self, e: EdgeId) -> VertexId;

    fn target(&self, e: EdgeId) -> VertexId;

    /// Attributes used to price the way.
    fn way_of(&self, e: EdgeId) -> &Way;

    fn junction_patch(&self, v: VertexId) -> Option<&PatchId>;

    fn way_patch(&self, e: EdgeId) -> Option<&PatchId>;

    /// Writes `patch` to `v` unless already set; returns whether it wrote.
    fn set_junction_patch_if_unset(&mut self, v: VertexId, patch: &PatchId) -> bool;

    /// Writes `patch` to `e` unless already set; returns whether it wrote.
    fn set_way_patch_if_unset(&mut self, e: EdgeId, patch: &PatchId) -> bool;

    /// `true` once every way leaving `v` carries a patch.
    fn is_resolved(&self, v: VertexId) -> bool {
        self.outgoing(v)
            .iter()
            .all(|&e| self.way_patch(e).is_some())
    }

    /// Precondition check run before coloring starts.
    fn check_well_formed(&self) -> Result<(), NetworkError> {
        Ok(())
    }
}

impl PatchableGraph for RoadGraph {
    fn vertex_count(&self) -> usize {
        RoadGraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        RoadGraph::edge_count(self)
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        RoadGraph::vertices(self)
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        RoadGraph::edges(self)
    }

    fn incoming(&self, v: VertexId) -> &[EdgeId] {
        RoadGraph::incoming(self, v)
    }

    fn outgoing(&self, v: VertexId) -> &[EdgeId] {
        RoadGraph::outgoing(self, v)
    }

    fn source(&self, e: EdgeId) -> VertexId {
        self.endpoints[e.index()].0
    }

    fn target(&self, e: EdgeId) -> VertexId {
        self.endpoints[e.index()].1
    }

    fn way_of(&self, e: EdgeId) -> &Way {
        &self.ways[e.index()]
    }

    fn junction_patch(&self, v: VertexId) -> Option<&PatchId> {
        self.junctions[v.index()].patch_id()
    }

    fn way_patch(&self, e: EdgeId) -> Option<&PatchId> {
        self.ways[e.index()].patch_id()
    }

    fn set_junction_patch_if_unset(&mut self, v: VertexId, patch: &PatchId) -> bool {
        self.set_vertex_patch_if_unset(v, patch)
    }

    fn set_way_patch_if_unset(&mut self, e: EdgeId, patch: &PatchId) -> bool {
        self.set_edge_patch_if_unset(e, patch)
    }

    fn check_well_formed(&self) -> Result<(), NetworkError> {
        validate_road_graph(self)
    }
}
