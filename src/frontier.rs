use crate::route::Route;
use std::{cmp::Ordering, collections::BinaryHeap};

struct FrontierEntry {
    priority: f64,
    seq: u64,
    route: Route,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        // Handle NaN by treating it as Equal
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier of in-progress routes.
///
/// Entries with equal priority extract in insertion order, which keeps
/// results deterministic and lets BFS run through the same structure:
/// give every entry priority 0.0 and extraction degenerates to FIFO.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            priority,
            seq,
            route,
        });
    }

    /// Extract the minimum-priority route together with its priority.
    pub fn pop(&mut self) -> Option<(Route, f64)> {
        self.heap.pop().map(|entry| (entry.route, entry.priority))
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
