//! Index arithmetic for implicit d-ary trees.
//!
//! This module provides the branching-factor primitive used by the heap to
//! navigate its dense backing storage as a complete tree: the parent of
//! index `i` is `(i - 1) / a`, and the children of `i` occupy
//! `[i*a + 1, i*a + a]`, clipped to the current length.
//!
//! All index math uses the configured arity; arity is never cosmetic. A
//! larger branching factor produces a shallower tree (fewer sift levels at
//! the cost of wider child scans), but never changes observable extraction
//! order.

// Internal dependencies
use crate::primitives::errors::OrdStatError;
use crate::primitives::validate::Validator;

// Smallest branching factor that still forms a tree.
pub const MIN_ARITY: usize = 2;

/// Validated branching factor of an implicit heap tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity(usize);

impl Arity {
    /// The common binary-heap case.
    pub const BINARY: Arity = Arity(2);

    /// Create a validated arity (`a >= 2`).
    pub fn new(arity: usize) -> Result<Self, OrdStatError> {
        Validator::validate_arity(arity)?;
        Ok(Self(arity))
    }

    /// The branching factor as a plain integer.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Parent index of `idx` (`idx` must be non-zero).
    #[inline]
    pub fn parent_of(self, idx: usize) -> usize {
        debug_assert!(idx > 0, "parent_of: the root has no parent");
        (idx - 1) / self.0
    }

    /// Index of the first (leftmost) child of `idx`.
    ///
    /// The children of `idx` are `first_child_of(idx) .. first_child_of(idx) + a`,
    /// clipped to the backing length by the caller.
    #[inline]
    pub fn first_child_of(self, idx: usize) -> usize {
        idx * self.0 + 1
    }
}

impl Default for Arity {
    fn default() -> Self {
        Self::BINARY
    }
}
