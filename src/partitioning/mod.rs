//! Entry-point for growing-patch partitioning.

pub mod error;
pub mod extract;
pub mod graph_traits;
pub mod growing;
pub mod metrics;
pub mod patch_id;
pub mod policy;
pub mod seed_select;
pub mod state;

pub use self::error::PartitionError;
pub use self::extract::{Patch, PatchConnection, PatchGraph, extract_patch_graph};
pub use self::growing::{GrowingPatchPartitioner, StepOutcome};
pub use self::patch_id::{PatchId, PatchIdSource, RandomPatchIds};
pub use self::policy::{AlwaysNewPatch, MergeIntoVisible, SingleColorPolicy, SingleColorStrategy};
pub use self::state::ColoringStats;

use serde::{Deserialize, Serialize};

use crate::algs::distance::MetricKind;
use crate::network::RoadGraph;

/// Exploration budget of the reference configuration, in metric units.
pub const DEFAULT_RANGE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerConfig {
    /// Cost budget of each bounded exploration.
    pub range: f64,
    /// How a way's cost is measured.
    pub metric: MetricKind,
    /// Behaviour when exactly one existing patch is in range.
    pub single_color: SingleColorStrategy,
    /// Seed for patch ids and the random root; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Restart from uncolored ways the frontier never reached.
    pub reseed_unreached: bool,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            metric: MetricKind::Time,
            single_color: SingleColorStrategy::AlwaysNew,
            rng_seed: None,
            reseed_unreached: true,
        }
    }
}

impl PartitionerConfig {
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.range.is_finite() && self.range > 0.0 {
            Ok(())
        } else {
            Err(PartitionError::InvalidRange(self.range))
        }
    }
}

/// Color `graph` with the default collaborators and return its patch graph.
pub fn partition(
    graph: &mut RoadGraph,
    cfg: &PartitionerConfig,
) -> Result<PatchGraph, PartitionError> {
    GrowingPatchPartitioner::from_config(cfg)?.partition(graph)
}

#[cfg(test)]
mod tests;
