//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the heap and estimator APIs. The prelude should
//! provide a one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use core::cmp::Ordering;

use ordstat::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that Heap, HeapBuilder, orientations, and the error type are
/// usable without qualification.
#[test]
fn test_prelude_imports() {
    let heap = HeapBuilder::new()
        .orientation(Min)
        .arity(3)
        .extend_from([2, 1, 3])
        .build();

    assert!(heap.is_ok(), "Basic build should work with prelude imports");
    assert_eq!(heap.unwrap().peek(), Ok(&1));
}

/// Test orientation variants are available unqualified.
#[test]
fn test_prelude_orientations() {
    let _ = HeapBuilder::<i32>::new().orientation(Min);
    let _ = HeapBuilder::<i32>::new().orientation(Max);
    let _: Orientation = Orientation::default();
}

/// Test comparator types are available.
///
/// Verifies Natural, FloatOrder, Cmp, and the TotalOrder trait are exported.
#[test]
fn test_prelude_comparators() {
    fn assert_order<T, C: TotalOrder<T>>(_order: &C) {}

    assert_order::<i32, _>(&Natural);
    assert_order::<f64, _>(&FloatOrder);
    assert_order::<i32, _>(&Cmp(|a: &i32, b: &i32| a.cmp(b)));
    assert_eq!(Natural.compare(&1, &2), Ordering::Less);
}

/// Test the estimator and drain types are available.
#[test]
fn test_prelude_estimator_and_drain() {
    let mut median = RunningMedian::new();
    median.add(1.0).unwrap();

    let heap = Heap::<i32>::min();
    let drain: SortedDrain<i32> = heap.drain_sorted();
    assert_eq!(drain.count(), 0);
}

/// Test the error type is available and matchable.
#[test]
fn test_prelude_error() {
    let empty: Heap<u8> = Heap::min();
    match empty.peek() {
        Err(OrdStatError::EmptyHeap) => {}
        other => panic!("Expected EmptyHeap, got {other:?}"),
    }
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a complete workflow through prelude imports only.
#[test]
fn test_prelude_workflow() {
    let mut heap = HeapBuilder::new()
        .orientation(Max)
        .arity(4)
        .extend_from([10, 40, 20, 30])
        .build()
        .unwrap();

    assert_eq!(heap.extract(), Ok(40));
    assert_eq!(heap.extract(), Ok(30));

    let remaining: Vec<i32> = heap.drain_sorted().collect();
    assert_eq!(remaining, vec![20, 10]);
}
