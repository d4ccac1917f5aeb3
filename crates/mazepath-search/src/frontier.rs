//! The open-set priority frontier.
//!
//! A min-priority structure over `(f, discovery order)` backed by a
//! `BinaryHeap` with reversed ordering. There is no decrease-key: when a
//! cell is relaxed again, a second entry is simply pushed and the stale one
//! is skipped on pop via the engine's closed-set check (lazy deletion).

use std::collections::BinaryHeap;

/// One pending frontier entry.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: i32,
    /// Monotonic discovery counter; equal-f ties pop in insertion order.
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first,
        // oldest entry first among equals.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier of pending cells, ordered by f-score with
/// deterministic insertion-order tie-breaking.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push a cell with the given f-score. Duplicates are allowed.
    pub(crate) fn push(&mut self, f: i32, idx: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, idx });
    }

    /// Pop the lowest-f entry, oldest first among ties.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }
}
