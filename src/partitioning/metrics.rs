//! Partitioning metrics utilities.
//!
//! Quality figures for a colored road graph. The partitioner logs them after
//! each run; tests and benches use them to compare policies.

use hashbrown::HashMap;

use super::graph_traits::PatchableGraph;
use super::patch_id::PatchId;

/// Counts the ways whose endpoint junctions lie in different patches (O(E)).
///
/// A junction without patch never matches anything, so ways touching one are
/// counted as cut.
pub fn edge_cut<G: PatchableGraph>(graph: &G) -> usize {
    graph.edges().filter(|&e| crosses(graph, e)).count()
}

/// Parallel [`edge_cut`] for large networks.
#[cfg(feature = "rayon")]
pub fn par_edge_cut<G: PatchableGraph + Sync>(graph: &G) -> usize {
    use rayon::prelude::*;
    let edges: Vec<_> = graph.edges().collect();
    edges.par_iter().filter(|&&e| crosses(graph, e)).count()
}

fn crosses<G: PatchableGraph>(graph: &G, e: crate::network::EdgeId) -> bool {
    match (
        graph.junction_patch(graph.source(e)),
        graph.junction_patch(graph.target(e)),
    ) {
        (Some(a), Some(b)) => a != b,
        _ => true,
    }
}

/// Number of ways owned by each patch.
pub fn patch_way_counts<G: PatchableGraph>(graph: &G) -> HashMap<PatchId, usize> {
    let mut counts = HashMap::new();
    for e in graph.edges() {
        if let Some(p) = graph.way_patch(e) {
            *counts.entry(p.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// One-line summary of a colored graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionSummary {
    pub patches: usize,
    pub edge_cut: usize,
    pub largest_patch: usize,
    pub uncolored_ways: usize,
}

pub fn summarize<G: PatchableGraph>(graph: &G) -> PartitionSummary {
    let counts = patch_way_counts(graph);
    let colored: usize = counts.values().sum();
    PartitionSummary {
        patches: counts.len(),
        edge_cut: edge_cut(graph),
        largest_patch: counts.values().copied().max().unwrap_or(0),
        uncolored_ways: graph.edge_count() - colored,
    }
}
