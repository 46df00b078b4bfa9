//! Tests for the running-median estimator.
//!
//! These tests verify the two-heap median against a brute-force reference:
//! - The estimate equals the sorted-middle median after every add
//! - The two halves never differ in size by more than one
//! - Absent data and invalid samples surface explicitly
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Concrete scenarios, brute-force equivalence
//! 2. **Balance Invariant** - Partition sizes after every add
//! 3. **Failure Semantics** - Empty stream, non-finite samples
//! 4. **Lifecycle** - Batch adds, reset, precision variants

use approx::assert_abs_diff_eq;
use ordstat::prelude::*;
use rand::Rng;

/// Sorted-middle median of all samples seen so far.
fn brute_force_median(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test the odd-count scenario [5, 3, 8].
///
/// Verifies the median is the middle element, 5.
#[test]
fn test_odd_count_median() {
    let mut median = RunningMedian::new();
    median.add_all([5.0, 3.0, 8.0]).unwrap();

    assert_eq!(median.median(), Some(5.0));
}

/// Test the even-count scenario [5, 3, 8, 1].
///
/// Verifies the median is the mean of the two middle elements, 4.0.
#[test]
fn test_even_count_median() {
    let mut median = RunningMedian::new();
    median.add_all([5.0, 3.0, 8.0, 1.0]).unwrap();

    assert_eq!(median.median(), Some(4.0), "Mean of 3 and 5");
}

/// Test the estimate after every single add of a random stream.
///
/// Verifies equivalence with the brute-force median at each prefix.
#[test]
fn test_matches_brute_force_after_every_add() {
    let mut rng = rand::rng();
    let mut median = RunningMedian::new();
    let mut seen: Vec<f64> = Vec::new();

    for _ in 0..500 {
        let sample = rng.random_range(-100.0..100.0);
        median.add(sample).unwrap();
        seen.push(sample);

        let expected = brute_force_median(&seen);
        let got = median.median().expect("non-empty stream has a median");
        assert_abs_diff_eq!(got, expected, epsilon = 1e-9);
    }
}

/// Test monotone ascending and descending streams.
///
/// Verifies the estimator is insensitive to arrival order pathologies.
#[test]
fn test_monotone_streams() {
    let mut ascending = RunningMedian::new();
    ascending.add_all((1..=9).map(f64::from)).unwrap();
    assert_eq!(ascending.median(), Some(5.0));

    let mut descending = RunningMedian::new();
    descending.add_all((1..=9).rev().map(f64::from)).unwrap();
    assert_eq!(descending.median(), Some(5.0));
}

/// Test a stream of identical samples.
#[test]
fn test_constant_stream() {
    let mut median = RunningMedian::new();
    for _ in 0..7 {
        median.add(2.5).unwrap();
    }
    assert_eq!(median.median(), Some(2.5));
}

/// Test the single-sample stream.
#[test]
fn test_single_sample() {
    let mut median = RunningMedian::new();
    median.add(42.0).unwrap();
    assert_eq!(median.median(), Some(42.0));
    assert_eq!(median.len(), 1);
}

/// Test a second sample smaller than the first.
///
/// Verifies the halves end up ordered regardless of which arrives first.
#[test]
fn test_second_sample_smaller() {
    let mut median = RunningMedian::new();
    median.add(5.0).unwrap();
    median.add(3.0).unwrap();

    assert_eq!(median.median(), Some(4.0), "Mean of 3 and 5");
    assert_eq!(median.partition_sizes(), (1, 1));
}

// ============================================================================
// Balance Invariant Tests
// ============================================================================

/// Test the balance invariant after every add.
///
/// Verifies |lower - upper| <= 1 throughout a random stream.
#[test]
fn test_balance_invariant() {
    let mut rng = rand::rng();
    let mut median = RunningMedian::new();

    for i in 1..=300usize {
        median.add(rng.random_range(-1.0..1.0)).unwrap();

        let (lower, upper) = median.partition_sizes();
        assert!(
            lower.abs_diff(upper) <= 1,
            "Halves out of balance after add {i}: {lower} vs {upper}"
        );
        assert_eq!(lower + upper, i, "No sample may be lost or duplicated");
    }
}

// ============================================================================
// Failure Semantics Tests
// ============================================================================

/// Test that an empty stream has no median.
///
/// Verifies the result is None, never a numeric zero.
#[test]
fn test_empty_stream_has_no_median() {
    let median: RunningMedian<f64> = RunningMedian::new();
    assert_eq!(median.median(), None);
    assert!(median.is_empty());
}

/// Test that NaN and infinities are rejected explicitly.
///
/// Verifies the error variant and that the estimator state is unchanged.
#[test]
fn test_non_finite_samples_rejected() {
    let mut median = RunningMedian::new();
    median.add_all([1.0, 2.0, 3.0]).unwrap();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = median.add(bad).unwrap_err();
        assert!(
            matches!(err, OrdStatError::NonFiniteSample(_)),
            "Expected NonFiniteSample, got {err:?}"
        );
        assert_eq!(median.len(), 3, "Failed add must not change state");
        assert_eq!(median.median(), Some(2.0));
    }
}

/// Test that add_all stops at the first invalid sample.
///
/// Verifies samples before the failure are retained, later ones are not.
#[test]
fn test_add_all_stops_at_first_error() {
    let mut median = RunningMedian::new();
    let result = median.add_all([1.0, 2.0, f64::NAN, 4.0]);

    assert!(result.is_err(), "NaN mid-batch must surface");
    assert_eq!(median.len(), 2, "Samples before the failure are retained");
    assert_eq!(median.median(), Some(1.5));
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test reset discards all samples.
#[test]
fn test_reset() {
    let mut median = RunningMedian::new();
    median.add_all([9.0, 1.0, 5.0]).unwrap();

    median.reset();
    assert!(median.is_empty(), "Reset should discard all samples");
    assert_eq!(median.median(), None);

    median.add(7.0).unwrap();
    assert_eq!(median.median(), Some(7.0), "Reset estimator remains usable");
}

/// Test single-precision streams.
#[test]
fn test_f32_stream() {
    let mut median: RunningMedian<f32> = RunningMedian::new();
    median.add_all([2.0f32, 6.0, 4.0]).unwrap();
    assert_eq!(median.median(), Some(4.0f32));
}
