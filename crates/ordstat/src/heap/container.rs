//! Array-backed d-ary heap container.
//!
//! ## Purpose
//!
//! This module provides the generic priority container at the center of the
//! crate: a dense, 0-indexed sequence interpreted as an implicit complete
//! tree, parameterized by branching factor, orientation, and an injected
//! total order.
//!
//! ## Design notes
//!
//! * **One implementation**: Min and max heaps share a single sift routine;
//!   the orientation flag redirects comparisons instead of mirroring code.
//! * **Shape for free**: Insertion appends and removal truncates only at the
//!   end of the sequence, so the tree stays complete without bookkeeping.
//! * **Generalized arity**: All parent/child arithmetic uses the configured
//!   branching factor (see [`Arity`]); arity changes tree height, never
//!   observable extraction order.
//! * **Value semantics**: `Clone` produces a fully independent copy sharing
//!   no backing storage with the original.
//!
//! ## Key concepts
//!
//! * **Sift-up**: After an insert, the new element walks toward the root
//!   while it strictly outranks its parent.
//! * **Sift-down**: After a root removal, the relocated element walks toward
//!   the leaves, swapping with its best-ranked child while that child
//!   outranks it.
//!
//! ## Invariants
//!
//! * For every index with children, the element there is never outranked by
//!   any of its children; the root holds the globally best element.
//! * Every public operation moves the container atomically from one valid
//!   state to another; there are no observable intermediate states.
//!
//! ## Non-goals
//!
//! * No arbitrary-key deletion or decrease-key support.
//! * No bulk O(n) heapify; initial collections are inserted one at a time.
//! * No internal locking; embedders share instances behind their own lock.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::heap::drain::SortedDrain;
use crate::primitives::arity::Arity;
use crate::primitives::errors::OrdStatError;
use crate::primitives::order::{Natural, Orientation, TotalOrder};

// ============================================================================
// Heap Container
// ============================================================================

/// A generic d-ary heap.
///
/// The element at index 0 is the best element under the configured
/// orientation and order: the minimum for [`Orientation::Min`], the maximum
/// for [`Orientation::Max`]. Duplicates are permitted and mutually
/// unordered.
#[derive(Debug, Clone)]
pub struct Heap<T, C = Natural> {
    items: Vec<T>,
    order: C,
    orientation: Orientation,
    arity: Arity,
}

impl<T, C: TotalOrder<T>> Heap<T, C> {
    /// Assemble a heap from validated parts.
    ///
    /// Construction goes through [`HeapBuilder`](crate::api::HeapBuilder) or
    /// the [`min`](Heap::min)/[`max`](Heap::max) shorthands, which own the
    /// arity validation.
    pub(crate) fn from_parts(orientation: Orientation, arity: Arity, order: C) -> Self {
        Self {
            items: Vec::new(),
            order,
            orientation,
            arity,
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of elements currently stored. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The configured orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The configured branching factor.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity.get()
    }

    /// Borrow the best element without removing it. O(1).
    ///
    /// Fails with [`OrdStatError::EmptyHeap`] on an empty heap.
    pub fn peek(&self) -> Result<&T, OrdStatError> {
        self.items.first().ok_or(OrdStatError::EmptyHeap)
    }

    /// Unordered traversal of the backing storage. O(n).
    ///
    /// Yields every element in storage order, which carries no ordering
    /// guarantee beyond the heap invariant. Use
    /// [`drain_sorted`](Heap::drain_sorted) for a fully sorted sequence.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert an element. O(log_a n).
    ///
    /// Appends at the end of the backing sequence, then sifts up while the
    /// element strictly outranks its parent. Infallible; capacity is
    /// unbounded.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the best element. O(log_a n).
    ///
    /// Moves the last element into the root slot, shrinks the sequence, and
    /// sifts down. Fails with [`OrdStatError::EmptyHeap`] on an empty heap.
    pub fn extract(&mut self) -> Result<T, OrdStatError> {
        let n = self.items.len();
        if n > 1 {
            self.items.swap(0, n - 1);
        }
        let root = self.items.pop().ok_or(OrdStatError::EmptyHeap)?;
        self.sift_down(0);
        Ok(root)
    }

    /// Remove all elements, keeping the configuration.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Verify the heap invariant across the whole structure. O(n).
    ///
    /// For every index with children, checks that the parent is never
    /// outranked by a child. Diagnostic use only; no public operation relies
    /// on it at runtime.
    pub fn is_consistent(&self) -> bool {
        let n = self.items.len();
        for idx in 0..n {
            let first = self.arity.first_child_of(idx);
            if first >= n {
                break;
            }
            let end = usize::min(first + self.arity.get(), n);
            for child in first..end {
                if self.outranks(&self.items[child], &self.items[idx]) {
                    return false;
                }
            }
        }
        true
    }

    // ========================================================================
    // Sift Routines
    // ========================================================================

    /// True when `a` would be extracted before `b`.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.orientation.outranks(self.order.compare(a, b))
    }

    // Walk `idx` toward the root while it strictly outranks its parent.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = self.arity.parent_of(idx);
            if self.outranks(&self.items[idx], &self.items[parent]) {
                self.items.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    // Walk `idx` toward the leaves, swapping with the best-ranked child
    // while that child strictly outranks the current element.
    fn sift_down(&mut self, mut idx: usize) {
        while let Some(child) = self.best_child(idx) {
            if self.outranks(&self.items[child], &self.items[idx]) {
                self.items.swap(idx, child);
                idx = child;
            } else {
                break;
            }
        }
    }

    // Index of the best-ranked of the up-to-`a` children of `idx`, or None
    // for a leaf.
    fn best_child(&self, idx: usize) -> Option<usize> {
        let first = self.arity.first_child_of(idx);
        let n = self.items.len();
        if first >= n {
            return None;
        }
        let end = usize::min(first + self.arity.get(), n);
        let mut best = first;
        for child in (first + 1)..end {
            if self.outranks(&self.items[child], &self.items[best]) {
                best = child;
            }
        }
        Some(best)
    }
}

// ============================================================================
// Natural-Order Shorthands
// ============================================================================

impl<T: Ord> Heap<T, Natural> {
    /// A binary min-heap over the natural order of `T`.
    pub fn min() -> Self {
        Self::from_parts(Orientation::Min, Arity::BINARY, Natural)
    }

    /// A binary max-heap over the natural order of `T`.
    pub fn max() -> Self {
        Self::from_parts(Orientation::Max, Arity::BINARY, Natural)
    }
}

// ============================================================================
// Linear Diagnostics
// ============================================================================

impl<T: PartialEq, C: TotalOrder<T>> Heap<T, C> {
    /// Whether `item` is present. O(n) linear scan, not an indexed lookup.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|stored| stored == item)
    }
}

// ============================================================================
// Draining Enumeration
// ============================================================================

impl<T: Clone, C: TotalOrder<T>> Heap<T, C> {
    /// Enumerate all elements in fully sorted (extraction) order.
    ///
    /// Clones the heap internally and extracts from the clone until empty,
    /// so the original is never disturbed and the call may be repeated.
    /// This is a full sort: O(n log_a n), not a cheap traversal. Callers
    /// that only need the elements in arbitrary order should use
    /// [`iter`](Heap::iter) instead.
    pub fn drain_sorted(&self) -> SortedDrain<T, C> {
        SortedDrain::new(self.clone())
    }
}
