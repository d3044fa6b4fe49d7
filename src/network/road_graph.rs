//! In-memory arena of junctions and directed ways.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, VertexId};
use crate::network_error::NetworkError;
use crate::partitioning::patch_id::PatchId;

/// A road junction (graph vertex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    key: String,
    patch_id: Option<PatchId>,
}

impl Junction {
    /// External identity of the junction, unique within one graph.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Patch owning this junction, if one was assigned.
    pub fn patch_id(&self) -> Option<&PatchId> {
        self.patch_id.as_ref()
    }
}

/// A directed road segment (graph edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    /// Length in metres.
    pub length: f64,
    /// Speed limit in metres per second.
    pub max_speed: f64,
    patch_id: Option<PatchId>,
}

impl Way {
    pub fn new(length: f64, max_speed: f64) -> Self {
        Self {
            length,
            max_speed,
            patch_id: None,
        }
    }

    /// Patch owning this way, if one was assigned.
    pub fn patch_id(&self) -> Option<&PatchId> {
        self.patch_id.as_ref()
    }

    pub(crate) fn check(&self) -> Result<(), NetworkError> {
        let length_ok = self.length.is_finite() && self.length >= 0.0;
        let speed_ok = self.max_speed.is_finite() && self.max_speed > 0.0;
        if length_ok && speed_ok {
            Ok(())
        } else {
            Err(NetworkError::InvalidWay {
                length: self.length,
                max_speed: self.max_speed,
            })
        }
    }
}

/// Directed road network stored as flat arenas addressed by [`VertexId`] / [`EdgeId`].
///
/// Adjacency lists keep insertion order, which makes every traversal over the
/// graph deterministic for a given construction sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadGraph {
    pub(crate) junctions: Vec<Junction>,
    pub(crate) ways: Vec<Way>,
    pub(crate) endpoints: Vec<(VertexId, VertexId)>,
    pub(crate) incoming: Vec<Vec<EdgeId>>,
    pub(crate) outgoing: Vec<Vec<EdgeId>>,
    pub(crate) by_key: HashMap<String, VertexId>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(junctions: usize, ways: usize) -> Self {
        Self {
            junctions: Vec::with_capacity(junctions),
            ways: Vec::with_capacity(ways),
            endpoints: Vec::with_capacity(ways),
            incoming: Vec::with_capacity(junctions),
            outgoing: Vec::with_capacity(junctions),
            by_key: HashMap::with_capacity(junctions),
        }
    }

    /// Registers a new junction under `key`.
    pub fn add_junction(&mut self, key: impl Into<String>) -> Result<VertexId, NetworkError> {
        let key = key.into();
        if self.by_key.contains_key(&key) {
            return Err(NetworkError::DuplicateJunction(key));
        }
        let id = VertexId::new(next_index(self.junctions.len())?);
        self.junctions.push(Junction {
            key: key.clone(),
            patch_id: None,
        });
        self.incoming.push(Vec::new());
        self.outgoing.push(Vec::new());
        self.by_key.insert(key, id);
        Ok(id)
    }

    /// Adds a directed way `source -> target`.
    pub fn add_way(
        &mut self,
        source: VertexId,
        target: VertexId,
        way: Way,
    ) -> Result<EdgeId, NetworkError> {
        for v in [source, target] {
            if v.index() >= self.junctions.len() {
                return Err(NetworkError::MissingJunction(v));
            }
        }
        way.check()?;
        let id = EdgeId::new(next_index(self.ways.len())?);
        self.ways.push(way);
        self.endpoints.push((source, target));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        Ok(id)
    }

    /// Same as [`add_way`](Self::add_way) but addresses endpoints by junction key.
    pub fn connect(
        &mut self,
        source_key: &str,
        target_key: &str,
        way: Way,
    ) -> Result<EdgeId, NetworkError> {
        let source = self.require_key(source_key)?;
        let target = self.require_key(target_key)?;
        self.add_way(source, target, way)
    }

    fn require_key(&self, key: &str) -> Result<VertexId, NetworkError> {
        self.vertex_by_key(key)
            .ok_or_else(|| NetworkError::UnknownJunction(key.to_owned()))
    }

    pub fn vertex_by_key(&self, key: &str) -> Option<VertexId> {
        self.by_key.get(key).copied()
    }

    pub fn junction(&self, v: VertexId) -> Option<&Junction> {
        self.junctions.get(v.index())
    }

    pub fn way(&self, e: EdgeId) -> Option<&Way> {
        self.ways.get(e.index())
    }

    /// `(source, target)` of a way.
    pub fn endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.endpoints.get(e.index()).copied()
    }

    pub fn incoming(&self, v: VertexId) -> &[EdgeId] {
        self.incoming.get(v.index()).map_or(&[], Vec::as_slice)
    }

    pub fn outgoing(&self, v: VertexId) -> &[EdgeId] {
        self.outgoing.get(v.index()).map_or(&[], Vec::as_slice)
    }

    pub fn vertex_count(&self) -> usize {
        self.junctions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.ways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.junctions.len() as u32).map(VertexId::new)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.ways.len() as u32).map(EdgeId::new)
    }

    /// Assigns `patch` to junction `v` unless it already carries one.
    ///
    /// Returns `true` if the junction was written.
    pub fn set_vertex_patch_if_unset(&mut self, v: VertexId, patch: &PatchId) -> bool {
        match self.junctions.get_mut(v.index()) {
            Some(j) if j.patch_id.is_none() => {
                j.patch_id = Some(patch.clone());
                true
            }
            _ => false,
        }
    }

    /// Assigns `patch` to way `e` unless it already carries one.
    ///
    /// Returns `true` if the way was written.
    pub fn set_edge_patch_if_unset(&mut self, e: EdgeId, patch: &PatchId) -> bool {
        match self.ways.get_mut(e.index()) {
            Some(w) if w.patch_id.is_none() => {
                w.patch_id = Some(patch.clone());
                true
            }
            _ => false,
        }
    }
}

fn next_index(len: usize) -> Result<u32, NetworkError> {
    u32::try_from(len)
        .ok()
        .filter(|&i| i < u32::MAX)
        .ok_or(NetworkError::CapacityExceeded(u32::MAX))
}
