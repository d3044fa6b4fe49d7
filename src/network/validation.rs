//! Structural validation of a [`RoadGraph`].
//!
//! Graphs built through [`RoadGraph::add_way`] are consistent by construction;
//! graphs deserialized from an external source are not, so the partitioner
//! runs [`validate_road_graph`] before touching anything.

use super::{EdgeId, RoadGraph, VertexId};
use crate::debug_invariants::DebugInvariants;
use crate::network_error::NetworkError;

/// Check way attributes, endpoint references, adjacency agreement and the key index.
pub fn validate_road_graph(graph: &RoadGraph) -> Result<(), NetworkError> {
    let n = graph.junctions.len();
    if graph.incoming.len() != n || graph.outgoing.len() != n {
        let vertex = VertexId::new(graph.incoming.len().min(graph.outgoing.len()) as u32);
        return Err(NetworkError::MissingJunction(vertex));
    }
    if graph.endpoints.len() != graph.ways.len() {
        let edge = EdgeId::new(graph.endpoints.len().min(graph.ways.len()) as u32);
        return Err(NetworkError::DanglingWay {
            edge,
            vertex: VertexId::new(n as u32),
        });
    }

    for (i, &(source, target)) in graph.endpoints.iter().enumerate() {
        let edge = EdgeId::new(i as u32);
        // A negative cost would let exploration run past its budget.
        graph.ways[i].check()?;
        for vertex in [source, target] {
            if vertex.index() >= n {
                return Err(NetworkError::DanglingWay { edge, vertex });
            }
        }
        if !graph.outgoing[source.index()].contains(&edge) {
            return Err(NetworkError::AdjacencyMismatch {
                vertex: source,
                edge,
            });
        }
        if !graph.incoming[target.index()].contains(&edge) {
            return Err(NetworkError::AdjacencyMismatch {
                vertex: target,
                edge,
            });
        }
    }

    // The reverse direction: every listed edge must exist and point back here.
    for v in graph.vertices() {
        for &edge in &graph.outgoing[v.index()] {
            match graph.endpoints.get(edge.index()) {
                Some(&(source, _)) if source == v => {}
                _ => return Err(NetworkError::AdjacencyMismatch { vertex: v, edge }),
            }
        }
        for &edge in &graph.incoming[v.index()] {
            match graph.endpoints.get(edge.index()) {
                Some(&(_, target)) if target == v => {}
                _ => return Err(NetworkError::AdjacencyMismatch { vertex: v, edge }),
            }
        }
    }

    if graph.by_key.len() != n {
        let orphan = graph
            .junctions
            .iter()
            .find(|j| !graph.by_key.contains_key(j.key()))
            .map(|j| j.key().to_owned())
            .unwrap_or_default();
        return Err(NetworkError::KeyIndexMismatch(orphan));
    }
    for (key, &v) in &graph.by_key {
        match graph.junctions.get(v.index()) {
            Some(j) if j.key() == key => {}
            _ => return Err(NetworkError::KeyIndexMismatch(key.clone())),
        }
    }

    Ok(())
}

impl DebugInvariants for RoadGraph {
    type Error = NetworkError;

    fn validate_invariants(&self) -> Result<(), NetworkError> {
        validate_road_graph(self)
    }
}
