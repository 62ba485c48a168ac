use crate::frontier::Frontier;
use crate::graph::{NodeId, RoadEdge, RoadGraph};
use crate::heuristic::heuristic;
use crate::route::Route;
use crate::search_config::SearchConfig;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Which cost model drives the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Minimum edge count; the frontier degenerates to a FIFO queue.
    Bfs,
    /// Minimum accumulated edge cost.
    Dijkstra,
    /// Minimum accumulated edge cost, guided by the crow-fly heuristic.
    AStar,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Bfs => "bfs",
            SearchMode::Dijkstra => "dijkstra",
            SearchMode::AStar => "astar",
        }
    }
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::AStar
    }
}

impl From<&str> for SearchMode {
    fn from(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "bfs" => SearchMode::Bfs,
            "dijkstra" => SearchMode::Dijkstra,
            _ => SearchMode::AStar,
        }
    }
}

impl From<String> for SearchMode {
    fn from(name: String) -> Self {
        SearchMode::from(name.as_str())
    }
}

/// Result of one search run: the route found (empty when the goal is
/// unreachable or the extension cap was hit) plus run statistics.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub route: Route,
    pub nodes_extended: usize,
    pub elapsed: Duration,
}

/// Shared frontier-expansion engine behind all search modes.
///
/// Repeatedly extracts the minimum-priority route and extends it by one
/// node. Duplicate entries for an already-extended node are discarded
/// lazily at extraction: the same node may enter the frontier several
/// times via different predecessors before its first (optimal) instance
/// is extracted, and only that first extraction counts. The priority
/// function is non-decreasing along any route in every mode, so the
/// first extraction of a node is optimal and extended nodes never need
/// reopening.
///
/// `forbidden_edge` skips exactly one directed traversal; `observer`,
/// when present, is called once per extended node in extraction order.
pub fn search<G: RoadGraph + ?Sized>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    mode: SearchMode,
    forbidden_edge: Option<RoadEdge>,
    config: &SearchConfig,
    mut observer: Option<&mut dyn FnMut(NodeId)>,
) -> SearchOutcome {
    let search_timer = Instant::now();

    let mut frontier = Frontier::new();
    let mut extended: FxHashSet<NodeId> = FxHashSet::default();

    let start_priority = match mode {
        SearchMode::AStar => heuristic(graph, start, end),
        _ => 0.0,
    };
    frontier.push(Route::new(start), start_priority);

    while let Some((route, priority)) = frontier.pop() {
        let Some(current) = route.last() else {
            continue;
        };

        if extended.contains(&current) {
            continue;
        }
        if let Some(cap) = config.max_extensions {
            if extended.len() >= cap {
                break;
            }
        }
        extended.insert(current);
        if let Some(notify) = observer.as_deref_mut() {
            notify(current);
        }

        if current == end {
            return SearchOutcome {
                route,
                nodes_extended: extended.len(),
                elapsed: search_timer.elapsed(),
            };
        }

        // Accumulated cost so far; for A* the stored priority also
        // carries the current node's heuristic, so peel it back off.
        let current_cost = match mode {
            SearchMode::Bfs => 0.0,
            SearchMode::Dijkstra => priority,
            SearchMode::AStar => priority - heuristic(graph, current, end),
        };

        for neighbor in graph.neighbors_of(current) {
            if extended.contains(&neighbor) {
                continue;
            }
            if let Some(skip) = forbidden_edge {
                if skip.from == current && skip.to == neighbor {
                    continue;
                }
            }

            let neighbor_priority = match mode {
                SearchMode::Bfs => 0.0,
                SearchMode::Dijkstra => {
                    current_cost + graph.edge_between(current, neighbor).cost
                }
                SearchMode::AStar => {
                    let new_cost = current_cost + graph.edge_between(current, neighbor).cost;
                    new_cost + heuristic(graph, neighbor, end)
                }
            };
            frontier.push(route.extended(neighbor), neighbor_priority);
        }
    }

    SearchOutcome {
        route: Route::empty(),
        nodes_extended: extended.len(),
        elapsed: search_timer.elapsed(),
    }
}

/// Minimum-hop route from `start` to `end`; empty if unreachable.
pub fn breadth_first_search<G: RoadGraph + ?Sized>(
    graph: &G,
    start: NodeId,
    end: NodeId,
) -> Route {
    search(
        graph,
        start,
        end,
        SearchMode::Bfs,
        None,
        &SearchConfig::default(),
        None,
    )
    .route
}

/// Minimum-cost route from `start` to `end`; empty if unreachable.
pub fn dijkstras_algorithm<G: RoadGraph + ?Sized>(
    graph: &G,
    start: NodeId,
    end: NodeId,
) -> Route {
    search(
        graph,
        start,
        end,
        SearchMode::Dijkstra,
        None,
        &SearchConfig::default(),
        None,
    )
    .route
}

/// Minimum-cost route from `start` to `end`, heuristic-guided; empty if
/// unreachable.
pub fn a_star<G: RoadGraph + ?Sized>(graph: &G, start: NodeId, end: NodeId) -> Route {
    search(
        graph,
        start,
        end,
        SearchMode::AStar,
        None,
        &SearchConfig::default(),
        None,
    )
    .route
}
