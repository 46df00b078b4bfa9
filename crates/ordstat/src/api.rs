//! High-level API for heap construction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for configuring
//! a heap: a fluent builder over orientation, branching factor, comparator,
//! and an optional initial collection.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (min-oriented,
//!   binary, natural order, empty).
//! * **Validated**: The branching factor is validated when `build()` is
//!   called; arity below 2 fails with [`OrdStatError::InvalidArity`].
//! * **Type-Safe**: Swapping the comparator retypes the builder, so a custom
//!   order never needs `T: Ord`. A missing or malformed comparator is
//!   unrepresentable; there is no error class for it.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HeapBuilder`] via `HeapBuilder::new()` or [`Heap::builder`].
//! 2. Chain configuration methods (`.orientation()`, `.arity()`, ...).
//! 3. Call `.build()` to validate and obtain the heap.
//!
//! Initial collections are populated through repeated single inserts; there
//! is no bulk heapify.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::heap::container::Heap;
use crate::primitives::arity::Arity;
use crate::primitives::errors::OrdStatError;
use crate::primitives::order::{Natural, Orientation, TotalOrder};

// Publicly re-exported types
pub use crate::estimators::median::RunningMedian;
pub use crate::heap::drain::SortedDrain;
pub use crate::primitives::order::{Cmp, FloatOrder};

// ============================================================================
// Heap Builder
// ============================================================================

/// Fluent builder for configuring a [`Heap`].
#[derive(Debug, Clone)]
pub struct HeapBuilder<T, C = Natural> {
    /// Which element the root exposes (default: [`Orientation::Min`]).
    pub orientation: Orientation,

    /// Branching factor of the implicit tree (default: 2; must be `>= 2`).
    pub arity: usize,

    /// Injected total order (default: the natural order of `T`).
    pub order: C,

    /// Initial elements, inserted one at a time by `build()`.
    pub seed: Vec<T>,
}

impl<T> HeapBuilder<T, Natural> {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            orientation: Orientation::default(),
            arity: Arity::BINARY.get(),
            order: Natural,
            seed: Vec::new(),
        }
    }
}

impl<T> Default for HeapBuilder<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> HeapBuilder<T, C> {
    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the orientation (min or max at the root).
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the branching factor. Validated at `build()`.
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Replace the comparator, retyping the builder.
    ///
    /// Use [`Cmp`] to wrap a comparison closure, or [`FloatOrder`] for
    /// floating-point elements.
    pub fn comparator<D>(self, order: D) -> HeapBuilder<T, D> {
        HeapBuilder {
            orientation: self.orientation,
            arity: self.arity,
            order,
            seed: self.seed,
        }
    }

    /// Append initial elements, inserted one at a time when building.
    pub fn extend_from<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.seed.extend(items);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and construct the heap.
    pub fn build(self) -> Result<Heap<T, C>, OrdStatError>
    where
        C: TotalOrder<T>,
    {
        let arity = Arity::new(self.arity)?;
        let mut heap = Heap::from_parts(self.orientation, arity, self.order);
        for item in self.seed {
            heap.insert(item);
        }
        Ok(heap)
    }
}

// ============================================================================
// Builder Entry Point
// ============================================================================

impl<T> Heap<T, Natural> {
    /// Start configuring a heap.
    pub fn builder() -> HeapBuilder<T, Natural> {
        HeapBuilder::new()
    }
}
