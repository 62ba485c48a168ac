use crate::frontier::Frontier;
use crate::graph::{NodeId, RoadGraph};
use crate::route::Route;
use crate::search::{SearchMode, a_star, search};
use crate::search_config::SearchConfig;
use rustc_hash::FxHashSet;

/// A candidate must differ from the baseline in more than this fraction
/// of the baseline's nodes to count as a genuine alternative.
const SUFFICIENT_DIFFERENCE: f64 = 0.2;

/// Finds the cheapest route that is meaningfully different from the best
/// one.
///
/// Runs A* once for the baseline, then once more per baseline edge with
/// that single edge forbidden. Forbidding one edge at a time is a cheap,
/// bounded way to force genuinely different detours without a full
/// k-shortest-paths search. Candidates that clear the diversity
/// threshold go into a cost-keyed selection heap; the cheapest wins.
/// Empty route when no candidate qualifies (or the goal is unreachable
/// to begin with).
pub fn alternative_route<G: RoadGraph + ?Sized>(graph: &G, start: NodeId, end: NodeId) -> Route {
    let best = a_star(graph, start, end);
    if best.len() < 2 {
        // Unreachable (empty) or start == end (single node): nothing to
        // detour around, the baseline is the answer.
        return best;
    }

    let mut candidates = Frontier::new();
    for edge in best.edges(graph) {
        let candidate = search(
            graph,
            start,
            end,
            SearchMode::AStar,
            Some(edge),
            &SearchConfig::default(),
            None,
        )
        .route;

        if is_sufficiently_different(&candidate, &best) {
            let cost = candidate.total_cost(graph);
            candidates.push(candidate, cost);
        }
    }

    match candidates.pop() {
        Some((route, _)) => route,
        None => Route::empty(),
    }
}

/// Diversity ratio: nodes of `candidate` absent from `baseline`, over
/// the baseline's node count (endpoints included). Strictly greater
/// than the threshold qualifies; landing exactly on it does not.
fn is_sufficiently_different(candidate: &Route, baseline: &Route) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let baseline_nodes: FxHashSet<NodeId> = baseline.nodes().iter().copied().collect();
    let novel_count = candidate
        .nodes()
        .iter()
        .filter(|node| !baseline_nodes.contains(node))
        .count();

    novel_count as f64 / baseline_nodes.len() as f64 > SUFFICIENT_DIFFERENCE
}
