//! The A* open set: a min-heap on `(f, seq)`.

use std::collections::BinaryHeap;

use gridpath_core::Point;
use ordered_float::OrderedFloat;

/// One frontier entry. A point may have several live entries; only the one
/// whose `g` matches the current best score is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) pos: Point,
    pub(crate) g: u32,
    pub(crate) f: OrderedFloat<f64>,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest pushed.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of [`OpenEntry`] with a monotonically increasing
/// insertion counter.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Point, g: u32, f: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry {
            pos,
            g,
            f: OrderedFloat(f),
            seq,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    /// Total number of pushes so far.
    #[inline]
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
