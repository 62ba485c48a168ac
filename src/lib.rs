pub mod alternative;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod route;
pub mod search;
pub mod search_config;

// Re-export commonly used items
pub use alternative::alternative_route;
pub use frontier::Frontier;
pub use graph::{NodeId, RoadEdge, RoadGraph};
pub use heuristic::heuristic;
pub use route::Route;
pub use search::{
    SearchMode, SearchOutcome, a_star, breadth_first_search, dijkstras_algorithm, search,
};
pub use search_config::SearchConfig;
