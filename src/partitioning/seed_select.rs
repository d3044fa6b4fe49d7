//! Root selection for growing-patch partitioning.
//!
//! [`graph_sources`] returns every junction without incoming ways. A graph
//! with no such junction (every junction lies on or behind a cycle) yields a
//! single junction drawn uniformly at random instead.

use rand::Rng;

use crate::network::VertexId;
use crate::partitioning::graph_traits::PatchableGraph;

/// Initial frontier for the coloring loop. Empty only for an empty graph.
pub fn graph_sources<G, R>(graph: &G, rng: &mut R) -> Vec<VertexId>
where
    G: PatchableGraph,
    R: Rng,
{
    let sources: Vec<VertexId> = graph
        .vertices()
        .filter(|&v| graph.incoming(v).is_empty())
        .collect();
    if !sources.is_empty() {
        return sources;
    }
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }
    let pick = rng.gen_range(0..n);
    graph.vertices().nth(pick).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{RoadGraph, Way};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn ring(n: usize) -> RoadGraph {
        let mut g = RoadGraph::new();
        let vs: Vec<_> = (0..n).map(|i| g.add_junction(format!("r{i}")).unwrap()).collect();
        for i in 0..n {
            g.add_way(vs[i], vs[(i + 1) % n], Way::new(1.0, 1.0)).unwrap();
        }
        g
    }

    #[test]
    fn sources_are_zero_in_degree_junctions() {
        let mut g = RoadGraph::new();
        let a = g.add_junction("a").unwrap();
        let b = g.add_junction("b").unwrap();
        let c = g.add_junction("c").unwrap();
        let d = g.add_junction("d").unwrap();
        g.add_way(a, c, Way::new(1.0, 1.0)).unwrap();
        g.add_way(b, c, Way::new(1.0, 1.0)).unwrap();
        g.add_way(c, d, Way::new(1.0, 1.0)).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(graph_sources(&g, &mut rng), vec![a, b]);
    }

    #[test]
    fn source_free_graph_falls_back_to_one_random_junction() {
        let g = ring(6);
        let mut rng = SmallRng::seed_from_u64(11);
        let roots = graph_sources(&g, &mut rng);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].index() < 6);

        let mut replay = SmallRng::seed_from_u64(11);
        assert_eq!(graph_sources(&g, &mut replay), roots);
    }

    #[test]
    fn empty_graph_has_no_roots() {
        let g = RoadGraph::new();
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(graph_sources(&g, &mut rng).is_empty());
    }

    #[test]
    fn isolated_junction_is_a_source() {
        let mut g = ring(3);
        let lone = g.add_junction("lone").unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(graph_sources(&g, &mut rng), vec![lone]);
    }
}
