//! Running-median estimator over an append-only numeric stream.
//!
//! ## Purpose
//!
//! This module provides the online median estimator: two heaps partition the
//! samples seen so far into a max-oriented lower half and a min-oriented
//! upper half, so the median is always readable from the two roots without
//! keeping the data in sorted form.
//!
//! ## Design notes
//!
//! * **Composition**: The estimator owns two [`Heap`]s and drives them
//!   through their public operations only; no backing storage is shared.
//! * **Costs**: O(log n) per insertion, O(1) per query.
//! * **Explicit absence**: The median of an empty stream is `None`, never a
//!   numeric zero a caller could mistake for data.
//! * **Explicit rejection**: NaN and infinite samples fail with
//!   [`OrdStatError::NonFiniteSample`] instead of being silently dropped.
//!
//! ## Invariants
//!
//! * Balance: the two halves never differ in size by more than one.
//! * Ordering: once both halves are non-empty, every value in the lower half
//!   is `<=` every value in the upper half; in particular
//!   `lower.peek() <= upper.peek()`.
//!
//! ## Non-goals
//!
//! * This estimator does not support sample removal or sliding windows.
//! * This estimator does not persist or serialize its state.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::heap::container::Heap;
use crate::primitives::arity::Arity;
use crate::primitives::errors::OrdStatError;
use crate::primitives::order::{FloatOrder, Orientation};
use crate::primitives::validate::Validator;

// ============================================================================
// Running Median Estimator
// ============================================================================

/// Streaming median over an unbounded, append-only stream of samples.
#[derive(Debug, Clone)]
pub struct RunningMedian<T> {
    /// Max-oriented heap holding the lower half of the stream.
    lower: Heap<T, FloatOrder>,

    /// Min-oriented heap holding the upper half of the stream.
    upper: Heap<T, FloatOrder>,
}

impl<T: Float> RunningMedian<T> {
    /// Create an empty estimator.
    pub fn new() -> Self {
        Self {
            lower: Heap::from_parts(Orientation::Max, Arity::BINARY, FloatOrder),
            upper: Heap::from_parts(Orientation::Min, Arity::BINARY, FloatOrder),
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Add one sample. O(log n).
    ///
    /// Fails with [`OrdStatError::NonFiniteSample`] for NaN or infinite
    /// values; the estimator state is unchanged on failure.
    pub fn add(&mut self, value: T) -> Result<(), OrdStatError> {
        Validator::validate_sample(value, "sample")?;

        if self.lower.is_empty() {
            self.lower.insert(value);
            return Ok(());
        }

        if self.upper.is_empty() {
            // Seed the upper half with whichever of the two known values is
            // greater, so the halves start ordered.
            if value < *self.lower.peek()? {
                let prior = self.lower.extract()?;
                self.upper.insert(prior);
                self.lower.insert(value);
            } else {
                self.upper.insert(value);
            }
            return Ok(());
        }

        if value < *self.lower.peek()? {
            self.lower.insert(value);
            if self.lower.len() > self.upper.len() + 1 {
                let shifted = self.lower.extract()?;
                self.upper.insert(shifted);
            }
        } else {
            self.upper.insert(value);
            if self.upper.len() > self.lower.len() + 1 {
                let shifted = self.upper.extract()?;
                self.lower.insert(shifted);
            }
        }

        Ok(())
    }

    /// Add a batch of samples in input order.
    ///
    /// Stops at the first invalid sample; samples before it are retained.
    pub fn add_all<I>(&mut self, values: I) -> Result<(), OrdStatError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// The median of all samples added so far. O(1).
    ///
    /// Returns `None` while no samples have been added. With an odd count
    /// the median is the root of the larger half; with an even count it is
    /// the arithmetic mean of the two roots.
    pub fn median(&self) -> Option<T> {
        let (lower_len, upper_len) = (self.lower.len(), self.upper.len());
        if lower_len > upper_len {
            self.lower.peek().ok().copied()
        } else if upper_len > lower_len {
            self.upper.peek().ok().copied()
        } else {
            let low = self.lower.peek().ok().copied()?;
            let high = self.upper.peek().ok().copied()?;
            Some((low + high) / T::from(2.0).unwrap())
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of samples added so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether any samples have been added.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Sizes of the lower and upper halves, in that order.
    ///
    /// The two sizes never differ by more than one.
    pub fn partition_sizes(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }

    /// Discard all samples.
    pub fn reset(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }
}

impl<T: Float> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}
