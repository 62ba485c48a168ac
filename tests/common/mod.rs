#![allow(dead_code)]

use roadpath::{NodeId, RoadEdge, RoadGraph};

/// In-memory adjacency-list road network for tests. Node positions feed
/// the crow-fly heuristic, so fixtures keep every edge cost at least
/// `distance / max_speed` to preserve admissibility.
pub struct FixtureGraph {
    positions: Vec<(f64, f64)>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
    max_speed: f64,
}

impl FixtureGraph {
    pub fn new(max_speed: f64) -> Self {
        Self {
            positions: Vec::new(),
            adjacency: Vec::new(),
            max_speed,
        }
    }

    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push((x, y));
        self.adjacency.push(Vec::new());
        id
    }

    pub fn add_one_way(&mut self, from: NodeId, to: NodeId, cost: f64) {
        self.adjacency[from.index()].push((to, cost));
    }

    pub fn add_road(&mut self, a: NodeId, b: NodeId, cost: f64) {
        self.add_one_way(a, b, cost);
        self.add_one_way(b, a, cost);
    }
}

impl RoadGraph for FixtureGraph {
    fn neighbors_of(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency[node.index()]
            .iter()
            .map(|&(neighbor, _)| neighbor)
            .collect()
    }

    fn edge_between(&self, from: NodeId, to: NodeId) -> RoadEdge {
        let cost = self.adjacency[from.index()]
            .iter()
            .find(|&&(neighbor, _)| neighbor == to)
            .map(|&(_, cost)| cost)
            .unwrap_or_else(|| panic!("edge_between called for non-adjacent nodes"));
        RoadEdge { from, to, cost }
    }

    fn crow_fly_distance_between(&self, a: NodeId, b: NodeId) -> f64 {
        let (ax, ay) = self.positions[a.index()];
        let (bx, by) = self.positions[b.index()];
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    fn max_road_speed(&self) -> f64 {
        self.max_speed
    }
}

/// Unit square A-B-C-D-A with unit edge costs. Returns [A, B, C, D].
pub fn unit_square_cycle() -> (FixtureGraph, [NodeId; 4]) {
    let mut graph = FixtureGraph::new(1.0);
    let a = graph.add_node(0.0, 0.0);
    let b = graph.add_node(1.0, 0.0);
    let c = graph.add_node(1.0, 1.0);
    let d = graph.add_node(0.0, 1.0);
    graph.add_road(a, b, 1.0);
    graph.add_road(b, c, 1.0);
    graph.add_road(c, d, 1.0);
    graph.add_road(d, a, 1.0);
    (graph, [a, b, c, d])
}

/// Three colinear nodes where A-C has a direct edge of cost 10.0 but the
/// detour through B costs 2.0 in total. Returns [A, B, C].
pub fn expensive_shortcut() -> (FixtureGraph, [NodeId; 3]) {
    let mut graph = FixtureGraph::new(1.0);
    let a = graph.add_node(0.0, 0.0);
    let b = graph.add_node(1.0, 0.0);
    let c = graph.add_node(2.0, 0.0);
    graph.add_road(a, b, 1.0);
    graph.add_road(b, c, 1.0);
    graph.add_road(a, c, 10.0);
    (graph, [a, b, c])
}

/// Five-node corridor A-B-C-D-E (unit costs) plus an isolated node Z with
/// no edges at all. Returns ([A, B, C, D, E], Z).
pub fn corridor_with_island() -> (FixtureGraph, [NodeId; 5], NodeId) {
    let mut graph = FixtureGraph::new(1.0);
    let a = graph.add_node(0.0, 0.0);
    let b = graph.add_node(1.0, 0.0);
    let c = graph.add_node(2.0, 0.0);
    let d = graph.add_node(3.0, 0.0);
    let e = graph.add_node(4.0, 0.0);
    let z = graph.add_node(10.0, 10.0);
    graph.add_road(a, b, 1.0);
    graph.add_road(b, c, 1.0);
    graph.add_road(c, d, 1.0);
    graph.add_road(d, e, 1.0);
    (graph, [a, b, c, d, e], z)
}
