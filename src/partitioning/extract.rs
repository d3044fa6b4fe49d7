//! Aggregate a fully colored road graph into a patch-level graph.
//!
//! Every distinct patch becomes one [`Patch`] holding its junctions and ways.
//! Ways whose endpoint junctions belong to different patches are folded into
//! one [`PatchConnection`] per ordered `(from, to)` patch pair.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::network::{EdgeId, VertexId};
use crate::partitioning::PartitionError;
use crate::partitioning::graph_traits::PatchableGraph;
use crate::partitioning::patch_id::PatchId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub id: PatchId,
    pub junctions: Vec<VertexId>,
    pub ways: Vec<EdgeId>,
}

/// All ways leading from junctions of `from` into junctions of `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchConnection {
    pub from: PatchId,
    pub to: PatchId,
    pub ways: Vec<EdgeId>,
}

/// Coarse graph with patches as vertices and aggregated connections as edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchGraph {
    pub patches: Vec<Patch>,
    pub connections: Vec<PatchConnection>,
}

impl PatchGraph {
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub fn patch(&self, id: &PatchId) -> Option<&Patch> {
        self.patches.iter().find(|p| &p.id == id)
    }

    pub fn connection(&self, from: &PatchId, to: &PatchId) -> Option<&PatchConnection> {
        self.connections
            .iter()
            .find(|c| &c.from == from && &c.to == to)
    }

    /// Patches reachable from `id` over one connection.
    pub fn successors<'a>(&'a self, id: &'a PatchId) -> impl Iterator<Item = &'a PatchId> + 'a {
        self.connections
            .iter()
            .filter(move |c| &c.from == id)
            .map(|c| &c.to)
    }
}

/// Build the [`PatchGraph`] of a graph whose junctions and ways all carry a patch.
///
/// Patches appear in the order their first junction appears in
/// `graph.vertices()`; a patch that only owns ways is appended when its first
/// way is met. Connections appear in order of their first way.
pub fn extract_patch_graph<G: PatchableGraph>(graph: &G) -> Result<PatchGraph, PartitionError> {
    let mut slot_of: HashMap<PatchId, usize> = HashMap::new();
    let mut patches: Vec<Patch> = Vec::new();
    let mut slot = |id: &PatchId, patches: &mut Vec<Patch>| -> usize {
        *slot_of.entry(id.clone()).or_insert_with(|| {
            patches.push(Patch {
                id: id.clone(),
                junctions: Vec::new(),
                ways: Vec::new(),
            });
            patches.len() - 1
        })
    };

    let mut junction_slot: Vec<(VertexId, usize)> = Vec::with_capacity(graph.vertex_count());
    for v in graph.vertices() {
        let id = graph
            .junction_patch(v)
            .ok_or(PartitionError::UncoloredJunction(v))?;
        let s = slot(id, &mut patches);
        patches[s].junctions.push(v);
        junction_slot.push((v, s));
    }
    let junction_slot: HashMap<VertexId, usize> = junction_slot.into_iter().collect();

    let mut link_of: HashMap<(usize, usize), usize> = HashMap::new();
    let mut connections: Vec<PatchConnection> = Vec::new();
    for e in graph.edges() {
        let id = graph.way_patch(e).ok_or(PartitionError::UncoloredWay(e))?;
        let s = slot(id, &mut patches);
        patches[s].ways.push(e);

        let (src, dst) = (graph.source(e), graph.target(e));
        let from = junction_slot[&src];
        let to = junction_slot[&dst];
        if from == to {
            continue;
        }
        let c = *link_of.entry((from, to)).or_insert_with(|| {
            connections.push(PatchConnection {
                from: patches[from].id.clone(),
                to: patches[to].id.clone(),
                ways: Vec::new(),
            });
            connections.len() - 1
        });
        connections[c].ways.push(e);
    }

    let out = PatchGraph {
        patches,
        connections,
    };
    out.debug_assert_invariants();
    Ok(out)
}

impl DebugInvariants for PatchGraph {
    type Error = PartitionError;

    fn validate_invariants(&self) -> Result<(), PartitionError> {
        let mut ids = HashSet::with_capacity(self.patches.len());
        for p in &self.patches {
            if !ids.insert(&p.id) {
                return Err(PartitionError::InconsistentPatchGraph(format!(
                    "patch {} listed twice",
                    p.id
                )));
            }
        }
        let mut pairs = HashSet::with_capacity(self.connections.len());
        for c in &self.connections {
            if c.from == c.to {
                return Err(PartitionError::InconsistentPatchGraph(format!(
                    "self connection on patch {}",
                    c.from
                )));
            }
            if !ids.contains(&c.from) || !ids.contains(&c.to) {
                return Err(PartitionError::InconsistentPatchGraph(format!(
                    "connection {} -> {} references an unknown patch",
                    c.from, c.to
                )));
            }
            if !pairs.insert((&c.from, &c.to)) {
                return Err(PartitionError::InconsistentPatchGraph(format!(
                    "connection {} -> {} listed twice",
                    c.from, c.to
                )));
            }
        }
        Ok(())
    }
}
