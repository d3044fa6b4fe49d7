//! Growing-patch partitioning of a road graph.
//!
//! The partitioner drains a FIFO frontier of junctions. For each junction
//! that still has an uncolored outgoing way it runs a bounded exploration and
//! looks at the distinct patches already present on the explored ways, in the
//! order the explorer reported them:
//!
//! * none: a new patch is minted and the whole explored region is colored,
//! * one: the [`SingleColorPolicy`] picks the patch, then the region is colored,
//! * two or more: only the junction and its outgoing ways take the first
//!   patch seen, and their targets go back on the frontier.
//!
//! Coloring a region assigns the patch to the root, to every explored way,
//! to each way's target junction and to all ways entering that target, never
//! overwriting an existing assignment. The border junctions of the
//! exploration are enqueued afterwards.
//!
//! Every step that is not discarded colors at least one way, and a way is
//! never uncolored, so the loop runs at most `|E|` productive steps.

use itertools::Itertools;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::algs::distance::MetricKind;
use crate::algs::range_bfs::{BoundedExplorer, RangeBfs, RangeResult};
use crate::network::{EdgeId, VertexId};
use crate::partitioning::extract::{PatchGraph, extract_patch_graph};
use crate::partitioning::graph_traits::PatchableGraph;
use crate::partitioning::metrics::summarize;
use crate::partitioning::patch_id::{PatchId, PatchIdSource, RandomPatchIds};
use crate::partitioning::policy::{SingleColorPolicy, SingleColorStrategy};
use crate::partitioning::seed_select::graph_sources;
use crate::partitioning::state::{ColoringState, ColoringStats};
use crate::partitioning::{PartitionError, PartitionerConfig};

// Keeps the root-selection stream apart from the patch-id stream for one seed.
const ROOT_STREAM_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Result of taking one junction off the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every outgoing way already carried a patch.
    Discarded,
    /// The explored region was colored with `patch`.
    Grown { patch: PatchId, fresh: bool },
    /// Two or more patches were in range; only the root was fixed up.
    Limited { patch: PatchId },
}

/// Frontier-driven region-growing partitioner.
#[derive(Debug, Clone)]
pub struct GrowingPatchPartitioner<
    E = RangeBfs<MetricKind>,
    P = SingleColorStrategy,
    I = RandomPatchIds,
> {
    explorer: E,
    policy: P,
    ids: I,
    rng: SmallRng,
    reseed_unreached: bool,
}

impl GrowingPatchPartitioner {
    /// Build the default explorer, policy and id source from `cfg`.
    pub fn from_config(cfg: &PartitionerConfig) -> Result<Self, PartitionError> {
        cfg.validate()?;
        let explorer = RangeBfs::new(cfg.range, cfg.metric);
        let ids = RandomPatchIds::new(cfg.rng_seed);
        let mut this = Self::with_parts(explorer, cfg.single_color, ids, cfg.rng_seed);
        this.reseed_unreached = cfg.reseed_unreached;
        Ok(this)
    }
}

impl<E, P, I> GrowingPatchPartitioner<E, P, I>
where
    P: SingleColorPolicy,
    I: PatchIdSource,
{
    /// Assemble a partitioner from explicit collaborators.
    ///
    /// `rng_seed` drives the random root choice on source-free graphs;
    /// `None` seeds from OS entropy.
    pub fn with_parts(explorer: E, policy: P, ids: I, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed ^ ROOT_STREAM_SALT),
            None => SmallRng::from_entropy(),
        };
        Self {
            explorer,
            policy,
            ids,
            rng,
            reseed_unreached: true,
        }
    }

    /// Whether to restart from an uncolored way once the frontier drains.
    pub fn reseed_unreached(mut self, enabled: bool) -> Self {
        self.reseed_unreached = enabled;
        self
    }

    pub fn explorer(&self) -> &E {
        &self.explorer
    }

    /// Color `graph` in place and return the patch-level graph.
    pub fn partition<G>(&mut self, graph: &mut G) -> Result<PatchGraph, PartitionError>
    where
        G: PatchableGraph,
        E: BoundedExplorer<G>,
    {
        let stats = self.color(graph)?;
        let patches = extract_patch_graph(&*graph)?;
        let summary = summarize(&*graph);
        info!(
            "Partitioning into patches finished: {} patches, {} connections, edge cut {}, largest patch {} ways ({} steps, {} discarded)",
            patches.patch_count(),
            patches.connections.len(),
            summary.edge_cut,
            summary.largest_patch,
            stats.steps,
            stats.discarded,
        );
        Ok(patches)
    }

    /// Assign a patch to every junction and way of `graph`.
    pub fn color<G>(&mut self, graph: &mut G) -> Result<ColoringStats, PartitionError>
    where
        G: PatchableGraph,
        E: BoundedExplorer<G>,
    {
        graph.check_well_formed()?;

        let roots = graph_sources(&*graph, &mut self.rng);
        if roots.is_empty() {
            warn!("Road graph is empty; nothing to partition");
            return Ok(ColoringStats::default());
        }
        debug!("Starting coloring from {} roots", roots.len());

        let mut state = ColoringState::new(roots);
        let mut cursor = 0usize;
        loop {
            while let Some(root) = state.pop() {
                self.step(graph, root, &mut state);
            }
            if !self.reseed_unreached {
                break;
            }
            // Ways below the cursor are colored for good.
            match next_uncolored_way(&*graph, &mut cursor) {
                Some(e) => {
                    let root = graph.source(e);
                    warn!("Way {e} unreached by the frontier; reseeding from {root}");
                    state.reseed(root);
                }
                None => break,
            }
        }

        self.settle_junctions(graph, &mut state.stats);
        Ok(state.stats)
    }

    /// Take one decision for `root` and update the frontier.
    pub fn step<G>(
        &mut self,
        graph: &mut G,
        root: VertexId,
        state: &mut ColoringState,
    ) -> StepOutcome
    where
        G: PatchableGraph,
        E: BoundedExplorer<G>,
    {
        state.stats.steps += 1;
        if graph.is_resolved(root) {
            state.stats.discarded += 1;
            return StepOutcome::Discarded;
        }

        let view: &G = graph;
        let range = self.explorer.explore(view, root);
        let colors: Vec<PatchId> = range
            .edges_in_range
            .iter()
            .filter_map(|&e| view.way_patch(e))
            .unique()
            .cloned()
            .collect();
        debug!("{root}: {} distinct patches in range", colors.len());

        let patch = match colors.as_slice() {
            [] => self.ids.next_patch_id(),
            [visible] => self.policy.resolve(visible, &mut self.ids),
            [first, ..] => {
                let patch = first.clone();
                limit_at_boundary(graph, root, &patch, state);
                state.stats.limited += 1;
                return StepOutcome::Limited { patch };
            }
        };

        let fresh = !colors.contains(&patch);
        if fresh {
            state.stats.fresh_patches += 1;
        }
        grow_region(graph, root, &range, &patch);
        state.extend(range.border_vertices);
        state.stats.grown += 1;
        StepOutcome::Grown { patch, fresh }
    }

    /// Give every junction still without patch the patch of an incident way,
    /// or a fresh one if it has none.
    fn settle_junctions<G: PatchableGraph>(&mut self, graph: &mut G, stats: &mut ColoringStats) {
        let view: &G = graph;
        let pending: Vec<VertexId> = view
            .vertices()
            .filter(|&v| view.junction_patch(v).is_none())
            .collect();
        for v in pending {
            let view: &G = graph;
            let inherited = view
                .incoming(v)
                .iter()
                .chain(view.outgoing(v))
                .find_map(|&e| view.way_patch(e))
                .cloned();
            let patch = match inherited {
                Some(p) => p,
                None => {
                    stats.fresh_patches += 1;
                    self.ids.next_patch_id()
                }
            };
            graph.set_junction_patch_if_unset(v, &patch);
            stats.settled += 1;
        }
    }
}

fn limit_at_boundary<G: PatchableGraph>(
    graph: &mut G,
    root: VertexId,
    patch: &PatchId,
    state: &mut ColoringState,
) {
    graph.set_junction_patch_if_unset(root, patch);
    let outgoing = graph.outgoing(root).to_vec();
    for e in outgoing {
        graph.set_way_patch_if_unset(e, patch);
        state.push(graph.target(e));
    }
}

fn grow_region<G: PatchableGraph>(
    graph: &mut G,
    root: VertexId,
    range: &RangeResult,
    patch: &PatchId,
) {
    graph.set_junction_patch_if_unset(root, patch);
    for &e in &range.edges_in_range {
        graph.set_way_patch_if_unset(e, patch);
        let target = graph.target(e);
        graph.set_junction_patch_if_unset(target, patch);
        let entering = graph.incoming(target).to_vec();
        for f in entering {
            graph.set_way_patch_if_unset(f, patch);
        }
    }
}

fn next_uncolored_way<G: PatchableGraph>(graph: &G, cursor: &mut usize) -> Option<EdgeId> {
    let found = graph
        .edges()
        .enumerate()
        .skip(*cursor)
        .find(|&(_, e)| graph.way_patch(e).is_none());
    match found {
        Some((i, e)) => {
            *cursor = i;
            Some(e)
        }
        None => {
            *cursor = graph.edge_count();
            None
        }
    }
}
