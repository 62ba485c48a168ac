/// Configuration for a single search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Give up after extending this many nodes (None = unbounded).
    /// Bounds worst-case work on very large or pathological graphs;
    /// a capped-out search reports no route.
    pub max_extensions: Option<usize>,
}

impl SearchConfig {
    pub fn new(max_extensions: Option<usize>) -> Self {
        Self { max_extensions }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_extensions: None,
        }
    }
}
