use serde::{Deserialize, Serialize};

/// Handle to a node in the road network: an index into the graph's node
/// table. Identity, not attributes — two distinct intersections at the
/// same coordinates are still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed traversal of a road segment with its travel cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
}

/// Read-only view of the road network the searches run over.
///
/// The graph owns its nodes and edges; the search algorithms only hold
/// `NodeId` handles into it. `edge_between` is defined only for pairs
/// where `to` was returned by `neighbors_of(from)` — calling it for a
/// non-adjacent pair is a contract violation and implementations may
/// panic rather than recover.
pub trait RoadGraph {
    /// Nodes directly reachable from `node`. Iteration order is fixed
    /// for a given graph; it affects tie-breaking, not correctness.
    fn neighbors_of(&self, node: NodeId) -> Vec<NodeId>;

    /// The edge traversed when moving from `from` to its neighbor `to`.
    /// Edge costs are nonnegative.
    fn edge_between(&self, from: NodeId, to: NodeId) -> RoadEdge;

    /// Straight-line distance between two nodes.
    fn crow_fly_distance_between(&self, a: NodeId, b: NodeId) -> f64;

    /// Maximum traversal speed over all edges in the graph. Positive.
    fn max_road_speed(&self) -> f64;
}
