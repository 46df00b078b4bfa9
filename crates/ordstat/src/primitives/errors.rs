//! Error types for heap and estimator operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while constructing
//! or operating a heap, or while feeding samples to an estimator.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the rejected arity).
//! * **Recoverable**: Every variant is caller-checkable ahead of time
//!   (`is_empty` before `extract`, finiteness before `add`).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for heap and estimator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdStatError {
    /// `peek` or `extract` was called on a heap with no elements.
    EmptyHeap,

    /// Heap construction was attempted with a branching factor below 2.
    InvalidArity(usize),

    /// A sample outside the orderable numeric domain (NaN or infinite)
    /// was offered to an estimator.
    NonFiniteSample(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OrdStatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyHeap => write!(f, "Heap is empty"),
            Self::InvalidArity(arity) => {
                write!(f, "Invalid arity: {arity} (must be at least 2)")
            }
            Self::NonFiniteSample(s) => write!(f, "Non-finite sample: {s}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for OrdStatError {}
