//! # ordstat — Generic d-ary heaps and streaming order statistics for Rust
//!
//! A generic, array-backed priority container with configurable branching
//! factor and orientation, plus a running-median estimator that composes two
//! heaps to track the middle of an unbounded numeric stream.
//!
//! ## What is a d-ary heap?
//!
//! A heap stores its elements as a dense sequence interpreted as an implicit
//! complete tree, keeping the best element (minimum or maximum under a
//! configurable order) at the root. Insert and remove-best cost
//! O(log n); reading the best element costs O(1). The branching factor
//! ("arity") generalizes the familiar binary heap: wider trees are shallower,
//! which trades sift depth against child-scan width without ever changing
//! the extraction order.
//!
//! ## Quick Start
//!
//! ### Priority queue
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! let mut heap = Heap::min();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert_eq!(heap.peek()?, &3);
//!
//! let sorted: Vec<i32> = heap.drain_sorted().collect();
//! assert_eq!(sorted, vec![3, 5, 8]);
//! assert_eq!(heap.len(), 3); // draining never disturbs the original
//! # Result::<(), OrdStatError>::Ok(())
//! ```
//!
//! ### Configured construction
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! let heap = HeapBuilder::new()
//!     .orientation(Max)     // expose the greatest element at the root
//!     .arity(4)             // 4-ary implicit tree
//!     .extend_from([1, 9, 4, 7])
//!     .build()?;
//!
//! assert_eq!(heap.peek()?, &9);
//! # Result::<(), OrdStatError>::Ok(())
//! ```
//!
//! ### Custom order
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! // Longest word first.
//! let heap = HeapBuilder::new()
//!     .orientation(Max)
//!     .comparator(Cmp(|a: &&str, b: &&str| a.len().cmp(&b.len())))
//!     .extend_from(["fir", "redwood", "oak"])
//!     .build()?;
//!
//! assert_eq!(heap.peek()?, &"redwood");
//! # Result::<(), OrdStatError>::Ok(())
//! ```
//!
//! ### Running median
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! let mut median = RunningMedian::new();
//! median.add_all([5.0, 3.0, 8.0])?;
//! assert_eq!(median.median(), Some(5.0));
//!
//! median.add(1.0)?;
//! assert_eq!(median.median(), Some(4.0)); // mean of 3 and 5
//! # Result::<(), OrdStatError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, OrdStatError>`:
//!
//! - `peek`/`extract` on an empty heap fail with `OrdStatError::EmptyHeap`.
//! - Building with `arity < 2` fails with `OrdStatError::InvalidArity`.
//! - Adding NaN or an infinity to [`RunningMedian`](prelude::RunningMedian)
//!   fails with `OrdStatError::NonFiniteSample`.
//!
//! Every error is synchronous and local; nothing is retried, logged, or
//! swallowed on the caller's behalf.
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! let mut heap: Heap<i32> = Heap::min();
//! assert_eq!(heap.extract(), Err(OrdStatError::EmptyHeap));
//!
//! let bad = HeapBuilder::<i32>::new().arity(1).build();
//! assert_eq!(bad.unwrap_err(), OrdStatError::InvalidArity(1));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ordstat = { version = "0.1", default-features = false }
//! ```
//!
//! ## Concurrency
//!
//! Heaps and estimators are synchronous, single-threaded value containers
//! with no internal locking. Sharing one instance across threads is the
//! embedder's responsibility (one lock per logical operation); the crate
//! provides no atomicity across multi-call sequences.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - order relations, index math, validation, errors.
mod primitives;

// Layer 2: Heap - the d-ary priority container and its draining iterator.
mod heap;

// Layer 3: Estimators - streaming order statistics composed from heaps.
mod estimators;

// High-level fluent API for heap construction.
mod api;

// Standard ordstat prelude.
pub mod prelude {
    pub use crate::api::{Cmp, FloatOrder, HeapBuilder, RunningMedian, SortedDrain};
    pub use crate::heap::container::Heap;
    pub use crate::primitives::errors::OrdStatError;
    pub use crate::primitives::order::{
        Natural,
        Orientation::{self, Max, Min},
        TotalOrder,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod heap {
        pub use crate::heap::*;
    }
    pub mod estimators {
        pub use crate::estimators::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
