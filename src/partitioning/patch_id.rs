//! Patch identifiers and the generators that mint them.
//!
//! A [`PatchId`] is an opaque 128-bit token; equality is the only operation
//! the partitioner relies on. Generation goes through the [`PatchIdSource`]
//! capability so that callers can make runs reproducible by seeding it.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Opaque identifier of one patch.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchId(Uuid);

impl PatchId {
    /// Wraps a fixed value. Mostly useful for tests and pre-coloured inputs.
    pub const fn from_u128(raw: u128) -> Self {
        PatchId(Uuid::from_u128(raw))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PatchId {
    fn from(u: Uuid) -> Self {
        PatchId(u)
    }
}

impl fmt::Debug for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PatchId").field(&self.0.hyphenated()).finish()
    }
}

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Capability that hands out fresh, never-repeating patch identifiers.
pub trait PatchIdSource {
    fn next_patch_id(&mut self) -> PatchId;
}

/// Random version-4 UUIDs drawn from a [`SmallRng`].
#[derive(Debug, Clone)]
pub struct RandomPatchIds {
    rng: SmallRng,
}

impl RandomPatchIds {
    /// Reproducible sequence for a fixed `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Sequence seeded from OS entropy; differs between runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl PatchIdSource for RandomPatchIds {
    fn next_patch_id(&mut self) -> PatchId {
        let bytes: [u8; 16] = self.rng.r#gen();
        PatchId(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl<S: PatchIdSource + ?Sized> PatchIdSource for &mut S {
    fn next_patch_id(&mut self) -> PatchId {
        (**self).next_patch_id()
    }
}
