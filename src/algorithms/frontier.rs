use crate::grid::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered cell waiting in the frontier.
///
/// Entries order by `(priority, sequence)`; `Ord` is reversed so that the
/// max-heap `BinaryHeap` pops the smallest entry first.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub priority: f64,
    pub sequence: u64,
    pub position: Position,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
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
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue without decrease-key.
///
/// An improved cell is pushed again with a fresh sequence number; the older
/// entry stays in the heap and is discarded by the engine when popped.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: f64, position: Position) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            position,
        });
    }

    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
