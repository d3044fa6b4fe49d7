//! Road network model: junctions, ways and the arena graph that owns them.

pub mod ids;
pub mod road_graph;
pub mod validation;

pub use ids::{EdgeId, VertexId};
pub use road_graph::{Junction, RoadGraph, Way};
pub use validation::validate_road_graph;
