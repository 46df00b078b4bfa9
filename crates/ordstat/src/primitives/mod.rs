//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! order relations, tree index arithmetic, validation, and shared error
//! types. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Estimators
//!   ↓
//! Layer 2: Heap
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Order relations and orientation.
pub mod order;

/// Index arithmetic for implicit d-ary trees.
pub mod arity;

/// Shared error types.
pub mod errors;

/// Configuration and sample validation.
pub mod validate;
