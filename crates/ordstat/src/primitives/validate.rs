//! Input validation for heap configuration and estimator samples.
//!
//! ## Purpose
//!
//! This module provides the validation functions used at heap construction
//! and at every estimator insertion. It checks parameter bounds (branching
//! factor) and the numeric domain of streamed samples (finiteness).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Sample validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * This module does not maintain heap order itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::arity::MIN_ARITY;
use crate::primitives::errors::OrdStatError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for heap configuration and streamed samples.
///
/// Provides static methods returning `Result<(), OrdStatError>`; each fails
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a heap branching factor (`arity >= 2`).
    pub fn validate_arity(arity: usize) -> Result<(), OrdStatError> {
        if arity < MIN_ARITY {
            return Err(OrdStatError::InvalidArity(arity));
        }
        Ok(())
    }

    /// Validate a single streamed sample for finiteness.
    pub fn validate_sample<T: Float>(val: T, name: &str) -> Result<(), OrdStatError> {
        if !val.is_finite() {
            return Err(OrdStatError::NonFiniteSample(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}
