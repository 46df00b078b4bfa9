//! Layer 2: Heap
//!
//! # Purpose
//!
//! This layer provides the generic priority container: an array-backed
//! implicit d-ary tree with configurable orientation and an injected total
//! order, plus its draining (fully sorted) enumerator.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Estimators
//!   ↓
//! Layer 2: Heap ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The d-ary heap container.
pub mod container;

/// Draining enumeration in extraction order.
pub mod drain;
