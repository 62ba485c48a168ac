use crate::graph::{NodeId, RoadEdge, RoadGraph};
use serde::{Deserialize, Serialize};

/// An ordered sequence of nodes from a search start to some reached node,
/// each consecutive pair connected by a graph edge.
///
/// Routes are never mutated once built: extending a route produces a new
/// value, so frontier entries sharing a prefix never observe each other's
/// extensions. An empty route means "no route exists".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// The trivial one-node route starting (and ending) at `start`.
    pub fn new(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    /// The no-route-exists value.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The node this route has reached so far.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Copy-on-append: a new route with `node` appended.
    pub fn extended(&self, node: NodeId) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self { nodes }
    }

    /// The ordered edges this route traverses.
    pub fn edges<G: RoadGraph + ?Sized>(&self, graph: &G) -> Vec<RoadEdge> {
        self.nodes
            .windows(2)
            .map(|pair| graph.edge_between(pair[0], pair[1]))
            .collect()
    }

    /// Sum of all edge costs along the route. Zero for empty and
    /// single-node routes.
    pub fn total_cost<G: RoadGraph + ?Sized>(&self, graph: &G) -> f64 {
        self.edges(graph).iter().map(|edge| edge.cost).sum()
    }
}
