//! Frontier and bookkeeping of one coloring run.

use std::collections::VecDeque;

use crate::network::VertexId;

/// Counters describing what a coloring run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColoringStats {
    /// Junctions taken off the frontier.
    pub steps: usize,
    /// Steps skipped because every outgoing way was already colored.
    pub discarded: usize,
    /// Steps that colored a whole explored region.
    pub grown: usize,
    /// Patches minted during growth and vertex settlement.
    pub fresh_patches: usize,
    /// Steps that only fixed up the root at a multi-patch boundary.
    pub limited: usize,
    /// Roots added after the frontier ran dry with ways still uncolored.
    pub reseeded: usize,
    /// Junctions queued by grown or limited steps.
    pub enqueued: usize,
    /// Junctions colored after the loop from their incident ways.
    pub settled: usize,
}

impl ColoringStats {
    /// Steps that colored at least one way.
    pub fn productive(&self) -> usize {
        self.grown + self.limited
    }
}

/// FIFO frontier of junctions awaiting a coloring decision.
#[derive(Debug, Clone, Default)]
pub struct ColoringState {
    frontier: VecDeque<VertexId>,
    pub stats: ColoringStats,
}

impl ColoringState {
    pub fn new(roots: impl IntoIterator<Item = VertexId>) -> Self {
        Self {
            frontier: roots.into_iter().collect(),
            stats: ColoringStats::default(),
        }
    }

    pub fn pop(&mut self) -> Option<VertexId> {
        self.frontier.pop_front()
    }

    pub fn push(&mut self, v: VertexId) {
        self.stats.enqueued += 1;
        self.frontier.push_back(v);
    }

    pub fn extend(&mut self, vs: impl IntoIterator<Item = VertexId>) {
        let before = self.frontier.len();
        self.frontier.extend(vs);
        self.stats.enqueued += self.frontier.len() - before;
    }

    /// Enqueue a fresh root once the frontier has drained.
    pub fn reseed(&mut self, v: VertexId) {
        self.stats.reseeded += 1;
        self.frontier.push_back(v);
    }

    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_drained(&self) -> bool {
        self.frontier.is_empty()
    }
}
