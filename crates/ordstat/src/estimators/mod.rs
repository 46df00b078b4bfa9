//! Layer 3: Estimators
//!
//! # Purpose
//!
//! This layer provides streaming order-statistic estimators built by
//! composing heaps from the layer below. Currently that is the running
//! median; the composition pattern (two opposed heaps bracketing a rank)
//! generalizes to other quantiles.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Estimators ← You are here
//!   ↓
//! Layer 2: Heap
//!   ↓
//! Layer 1: Primitives
//! ```

/// Running median over an append-only numeric stream.
pub mod median;
