//! What to do when an exploration touches exactly one existing patch.
//!
//! The reference behaviour mints a new patch anyway, which keeps patches
//! bounded by the exploration radius. Merging into the visible patch grows
//! fewer, larger patches. Either way the frontier loop is unchanged.

use serde::{Deserialize, Serialize};

use crate::partitioning::patch_id::{PatchId, PatchIdSource};

/// Picks the patch used to grow a region that sees a single existing patch.
pub trait SingleColorPolicy {
    fn resolve(&self, visible: &PatchId, ids: &mut dyn PatchIdSource) -> PatchId;
}

/// Always start a fresh patch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysNewPatch;

impl SingleColorPolicy for AlwaysNewPatch {
    fn resolve(&self, _visible: &PatchId, ids: &mut dyn PatchIdSource) -> PatchId {
        ids.next_patch_id()
    }
}

/// Extend the patch that is already visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeIntoVisible;

impl SingleColorPolicy for MergeIntoVisible {
    fn resolve(&self, visible: &PatchId, _ids: &mut dyn PatchIdSource) -> PatchId {
        visible.clone()
    }
}

/// Policy selected by name in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleColorStrategy {
    #[default]
    AlwaysNew,
    MergeIntoVisible,
}

impl SingleColorPolicy for SingleColorStrategy {
    fn resolve(&self, visible: &PatchId, ids: &mut dyn PatchIdSource) -> PatchId {
        match self {
            SingleColorStrategy::AlwaysNew => AlwaysNewPatch.resolve(visible, ids),
            SingleColorStrategy::MergeIntoVisible => MergeIntoVisible.resolve(visible, ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioning::patch_id::RandomPatchIds;

    #[test]
    fn always_new_ignores_visible() {
        let visible = PatchId::from_u128(5);
        let mut ids = RandomPatchIds::seeded(3);
        let got = AlwaysNewPatch.resolve(&visible, &mut ids);
        assert_ne!(got, visible);
        let mut replay = RandomPatchIds::seeded(3);
        assert_eq!(got, replay.next_patch_id());
    }

    #[test]
    fn merge_reuses_visible() {
        let visible = PatchId::from_u128(5);
        let mut ids = RandomPatchIds::seeded(3);
        assert_eq!(MergeIntoVisible.resolve(&visible, &mut ids), visible);
        assert_eq!(
            SingleColorStrategy::MergeIntoVisible.resolve(&visible, &mut ids),
            visible
        );
    }

    #[test]
    fn default_strategy_is_always_new() {
        assert_eq!(SingleColorStrategy::default(), SingleColorStrategy::AlwaysNew);
    }
}
