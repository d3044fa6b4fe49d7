//! Traversal cost of a way, as seen by the bounded explorer.

use serde::{Deserialize, Serialize};

use crate::network::Way;

/// Cost of traversing one way.
pub trait DistanceMetric {
    fn cost(&self, way: &Way) -> f64;
}

/// Free-flow travel time in seconds: `length / max_speed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeDistance;

impl DistanceMetric for TimeDistance {
    #[inline]
    fn cost(&self, way: &Way) -> f64 {
        way.length / way.max_speed
    }
}

/// Plain length in metres.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthDistance;

impl DistanceMetric for LengthDistance {
    #[inline]
    fn cost(&self, way: &Way) -> f64 {
        way.length
    }
}

/// Metric selected by name in [`PartitionerConfig`](crate::partitioning::PartitionerConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Time,
    Length,
}

impl DistanceMetric for MetricKind {
    fn cost(&self, way: &Way) -> f64 {
        match self {
            MetricKind::Time => TimeDistance.cost(way),
            MetricKind::Length => LengthDistance.cost(way),
        }
    }
}
