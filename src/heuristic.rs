use crate::graph::{NodeId, RoadGraph};

/// Lower-bound estimate of the remaining travel cost between two nodes:
/// crow-fly distance divided by the graph's maximum road speed.
///
/// No edge can be traversed faster than the global maximum speed and no
/// route is shorter than the straight line, so this never overestimates
/// the true cost (admissible) and satisfies the triangle inequality
/// against edge costs (consistent), which A* optimality relies on.
pub fn heuristic<G: RoadGraph + ?Sized>(graph: &G, from: NodeId, to: NodeId) -> f64 {
    graph.crow_fly_distance_between(from, to) / graph.max_road_speed()
}
