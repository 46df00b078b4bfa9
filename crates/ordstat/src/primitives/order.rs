//! Order relations for heap-ordered containers.
//!
//! ## Purpose
//!
//! This module defines how a heap decides which of two elements is "better":
//! an injectable total order (`TotalOrder`) combined with an orientation flag
//! (`Orientation`) selecting the minimum or the maximum as the root.
//!
//! ## Design notes
//!
//! * **One parameterization**: A single orientation flag replaces mirrored
//!   min/max container types; the sift logic is written once.
//! * **Injectable**: Comparators are zero-sized by default (`Natural`,
//!   `FloatOrder`) and carry no allocation; custom closures are wrapped in
//!   [`Cmp`] so heaps remain `Clone`-able.
//! * **Explicit**: All ordering decisions are passed at construction; nothing
//!   is read from ambient or global state.
//!
//! ## Key concepts
//!
//! * **Orientation**: Min-oriented heaps expose the least element at the root,
//!   max-oriented heaps the greatest.
//! * **Outranking**: `a` outranks `b` when `a` would be extracted first.
//!
//! ## Invariants
//!
//! * `compare` is a total order over the values the caller stores; equal
//!   elements are mutually unordered (duplicates are permitted).
//! * `FloatOrder` treats incomparable floats as equal; callers must keep NaN
//!   out of the container (the median estimator validates every sample).
//!
//! ## Non-goals
//!
//! * This module does not store elements or maintain heap shape.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Orientation
// ============================================================================

/// Whether the root of a heap holds the minimum or the maximum element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// The root is the least element under the configured order.
    #[default]
    Min,

    /// The root is the greatest element under the configured order.
    Max,
}

impl Orientation {
    /// Map a comparison result to "strictly better" under this orientation.
    #[inline]
    pub fn outranks(self, ordering: Ordering) -> bool {
        match self {
            Self::Min => ordering == Ordering::Less,
            Self::Max => ordering == Ordering::Greater,
        }
    }
}

// ============================================================================
// Total Order
// ============================================================================

/// An injectable total order over `T`.
///
/// Implementations must be cheap to clone; heaps clone their comparator
/// together with their backing storage.
pub trait TotalOrder<T>: Clone {
    /// Compare two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T` (`T: Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Natural;

impl<T: Ord> TotalOrder<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A total order over floating-point values.
///
/// Incomparable pairs (NaN involved) are treated as equal, the same
/// convention used when sorting float data elsewhere in this crate's
/// lineage. Callers are expected to keep NaN out of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatOrder;

impl<T: Float> TotalOrder<T> for FloatOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Adapter turning a cloneable comparison closure into a [`TotalOrder`].
#[derive(Debug, Clone, Copy)]
pub struct Cmp<F>(pub F);

impl<T, F> TotalOrder<T> for Cmp<F>
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
