//! Bounded exploration ("range BFS") over outgoing ways.
//!
//! Starting from one junction, ways are followed in cheapest-first order while
//! the accumulated cost stays within a fixed budget. The exploration reports
//! every way leaving an expanded junction, plus the *border* junctions where
//! expansion stopped: either the budget was exceeded on arrival, or the
//! junction has no outgoing ways at all.
//!
//! Ties between equal costs are broken by discovery order, so for a fixed
//! adjacency order the result is fully deterministic. Both result lists are
//! in discovery order; the coloring engine relies on this when it picks the
//! first patch seen in range.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};

use crate::algs::distance::DistanceMetric;
use crate::network::{EdgeId, VertexId};
use crate::partitioning::graph_traits::PatchableGraph;

/// Ways and border junctions reached by one bounded exploration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeResult {
    pub edges_in_range: Vec<EdgeId>,
    pub border_vertices: Vec<VertexId>,
}

/// Something that can explore a graph from a junction within a budget.
pub trait BoundedExplorer<G: PatchableGraph> {
    fn explore(&self, graph: &G, start: VertexId) -> RangeResult;
}

/// Cheapest-first bounded exploration with a pluggable [`DistanceMetric`].
#[derive(Debug, Clone)]
pub struct RangeBfs<M> {
    range: f64,
    metric: M,
}

impl<M: DistanceMetric> RangeBfs<M> {
    pub fn new(range: f64, metric: M) -> Self {
        Self { range, metric }
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    cost: f64,
    seq: u64,
    vertex: VertexId,
}

// BinaryHeap is a max-heap: invert so the cheapest, earliest entry pops first.
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl<G, M> BoundedExplorer<G> for RangeBfs<M>
where
    G: PatchableGraph,
    M: DistanceMetric,
{
    fn explore(&self, graph: &G, start: VertexId) -> RangeResult {
        let mut out = RangeResult::default();
        let mut best: HashMap<VertexId, f64> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        best.insert(start, 0.0);
        heap.push(Pending {
            cost: 0.0,
            seq,
            vertex: start,
        });

        while let Some(Pending { cost, vertex, .. }) = heap.pop() {
            if !settled.insert(vertex) {
                continue;
            }
            let outgoing = graph.outgoing(vertex);
            if cost > self.range || outgoing.is_empty() {
                out.border_vertices.push(vertex);
                continue;
            }
            for &e in outgoing {
                out.edges_in_range.push(e);
                let next = graph.target(e);
                if settled.contains(&next) {
                    continue;
                }
                let reach = cost + self.metric.cost(graph.way_of(e));
                let improves = best.get(&next).is_none_or(|&known| reach < known);
                if improves {
                    best.insert(next, reach);
                    seq += 1;
                    heap.push(Pending {
                        cost: reach,
                        seq,
                        vertex: next,
                    });
                }
            }
        }
        out
    }
}
