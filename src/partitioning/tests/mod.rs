use super::*;
use crate::network::{VertexId, Way};
use crate::partitioning::graph_traits::PatchableGraph;
use crate::partitioning::seed_select::graph_sources;
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::rngs::SmallRng;


fn chain(g: &mut RoadGraph, prefix: &str, n: usize, length: f64) -> Vec<VertexId> {
    let vs: Vec<_> = (0..n)
        .map(|i| g.add_junction(format!("{prefix}{i}")).unwrap())
        .collect();
    for w in vs.windows(2) {
        g.add_way(w[0], w[1], Way::new(length, 1.0)).unwrap();
    }
    vs
}

fn seeded() -> PartitionerConfig {
    PartitionerConfig {
        rng_seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn default_config_matches_reference() {
    let cfg = PartitionerConfig::default();
    assert_eq!(cfg.range, 50.0);
    assert_eq!(cfg.metric, MetricKind::Time);
    assert_eq!(cfg.single_color, SingleColorStrategy::AlwaysNew);
    assert!(cfg.reseed_unreached);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_rejects_bad_range() {
    for range in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let cfg = PartitionerConfig {
            range,
            ..Default::default()
        };
        assert!(matches!(
            GrowingPatchPartitioner::from_config(&cfg),
            Err(PartitionError::InvalidRange(_))
        ));
    }
}

#[test]
fn config_fields_default_when_missing_in_json() {
    let cfg: PartitionerConfig =
        serde_json::from_str(r#"{ "range": 120.0, "single_color": "merge_into_visible" }"#).unwrap();
    assert_eq!(cfg.range, 120.0);
    assert_eq!(cfg.single_color, SingleColorStrategy::MergeIntoVisible);
    assert_eq!(cfg.metric, MetricKind::Time);
    assert_eq!(cfg.rng_seed, None);
}

#[test]
fn e2e_five_junction_chain_single_patch() {
    let mut g = RoadGraph::new();
    let vs = chain(&mut g, "j", 5, 10.0);
    let pg = partition(&mut g, &seeded()).expect("partition must succeed");

    assert_eq!(pg.patch_count(), 1);
    assert!(pg.connections.is_empty());
    let patch = &pg.patches[0];
    assert_eq!(patch.junctions, vs);
    assert_eq!(patch.ways.len(), 4);
}

#[test]
fn e2e_two_disjoint_chains_two_patches() {
    let mut g = RoadGraph::new();
    let left = chain(&mut g, "l", 4, 10.0);
    let right = chain(&mut g, "r", 4, 10.0);
    let pg = partition(&mut g, &seeded()).unwrap();

    assert_eq!(pg.patch_count(), 2);
    assert!(pg.connections.is_empty());
    for members in [&left, &right] {
        let id = g.junction(members[0]).unwrap().patch_id().unwrap();
        let patch = pg.patch(id).unwrap();
        assert_eq!(&patch.junctions, members);
        assert_eq!(patch.ways.len(), 3);
    }
}

#[test]
fn long_chain_splits_into_connected_patches() {
    // 20 ways of 10 s each against a 50 s budget
    let mut g = RoadGraph::new();
    chain(&mut g, "c", 21, 10.0);
    let pg = partition(&mut g, &seeded()).unwrap();

    assert!(pg.patch_count() > 1);
    let ways: usize = pg.patches.iter().map(|p| p.ways.len()).sum();
    assert_eq!(ways, 20);
    // consecutive patches along a chain are linked in travel direction only
    for c in &pg.connections {
        assert!(pg.connection(&c.to, &c.from).is_none());
    }
}

#[test]
fn recoloring_a_colored_graph_discards_every_root() {
    let mut g = RoadGraph::new();
    chain(&mut g, "a", 6, 10.0);
    chain(&mut g, "b", 3, 10.0);
    let mut p = GrowingPatchPartitioner::from_config(&seeded()).unwrap();
    p.color(&mut g).unwrap();

    let mut rng = SmallRng::seed_from_u64(5);
    let roots = graph_sources(&g, &mut rng);
    assert!(roots.iter().all(|&r| g.is_resolved(r)));

    let before: Vec<_> = g.edges().map(|e| g.way(e).unwrap().patch_id().cloned()).collect();
    let again = p.color(&mut g).unwrap();
    assert_eq!(again.steps, roots.len());
    assert_eq!(again.discarded, again.steps);
    assert_eq!(again.productive(), 0);
    let after: Vec<_> = g.edges().map(|e| g.way(e).unwrap().patch_id().cloned()).collect();
    assert_eq!(before, after);
}

#[test]
fn merge_policy_yields_fewer_patches() {
    // Second exploration of a 10-way ring wraps around onto the first patch,
    // which is the single-visible-patch case.
    let count = |strategy| {
        let mut g = RoadGraph::new();
        let vs = chain(&mut g, "m", 10, 10.0);
        g.add_way(vs[9], vs[0], Way::new(10.0, 1.0)).unwrap();
        let cfg = PartitionerConfig {
            single_color: strategy,
            ..seeded()
        };
        partition(&mut g, &cfg).unwrap().patch_count()
    };
    assert_eq!(count(SingleColorStrategy::MergeIntoVisible), 1);
    assert_eq!(count(SingleColorStrategy::AlwaysNew), 2);
}

#[test]
fn cyclic_network_without_sources_is_covered() {
    let mut g = RoadGraph::new();
    let vs = chain(&mut g, "ring", 10, 10.0);
    g.add_way(vs[9], vs[0], Way::new(10.0, 1.0)).unwrap();
    let pg = partition(&mut g, &seeded()).unwrap();

    let seen: HashSet<_> = pg.patches.iter().flat_map(|p| p.ways.iter().copied()).collect();
    assert_eq!(seen.len(), 10);
    let junctions: usize = pg.patches.iter().map(|p| p.junctions.len()).sum();
    assert_eq!(junctions, 10);
}
