//! Draining enumeration over a cloned heap.
//!
//! ## Purpose
//!
//! This module provides [`SortedDrain`], the lazy iterator behind
//! [`Heap::drain_sorted`](crate::heap::container::Heap::drain_sorted). It
//! owns a private clone of the source heap and yields elements in extraction
//! order by repeatedly removing the clone's root.
//!
//! ## Design notes
//!
//! * **Non-restartable**: The iterator consumes its clone; a fresh call to
//!   `drain_sorted` re-clones and starts over.
//! * **Costed explicitly**: Producing the full sequence is O(n log_a n).
//!   The name says "drain" rather than "iterate" so the sort is never
//!   mistaken for a cheap traversal.
//!
//! ## Invariants
//!
//! * A min-oriented source yields a non-decreasing sequence; a max-oriented
//!   source yields a non-increasing one.
//! * The source heap is never observed or mutated after construction.

// Internal dependencies
use crate::heap::container::Heap;
use crate::primitives::order::{Natural, TotalOrder};

// ============================================================================
// Sorted Drain Iterator
// ============================================================================

/// Lazy, finite, non-restartable iterator in extraction order.
#[derive(Debug, Clone)]
pub struct SortedDrain<T, C = Natural> {
    remaining: Heap<T, C>,
}

impl<T, C: TotalOrder<T>> SortedDrain<T, C> {
    /// Take ownership of an already-cloned heap to drain.
    pub(crate) fn new(remaining: Heap<T, C>) -> Self {
        Self { remaining }
    }
}

impl<T, C: TotalOrder<T>> Iterator for SortedDrain<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len();
        (n, Some(n))
    }
}

impl<T, C: TotalOrder<T>> ExactSizeIterator for SortedDrain<T, C> {}

impl<T, C: TotalOrder<T>> core::iter::FusedIterator for SortedDrain<T, C> {}
