//! Graph algorithms used by the partitioner.

pub mod distance;
pub mod range_bfs;

pub use distance::{DistanceMetric, LengthDistance, MetricKind, TimeDistance};
pub use range_bfs::{BoundedExplorer, RangeBfs, RangeResult};
