#![cfg(feature = "dev")]
//! Tests for bubble sort.
//!
//! These tests verify the adjacent-swap passes:
//! - Ascending output and multiset preservation
//! - Early termination on sorted input (idempotence)
//! - Boundary behavior on empty and single-element lists
//! - Value-level stability for equal elements
//!
//! ## Test Organization
//!
//! 1. **Correctness** - assorted inputs against the expected order
//! 2. **Boundaries** - empty, single, pair
//! 3. **Stability** - equal values keep their relative order
//! 4. **Randomized** - seeded inputs cross-checked against slice::sort

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use listsort::internals::algorithms::bubble::bubble_sort;
use listsort::internals::primitives::list::IntList;

fn sorted_by(input: &[i64]) -> Vec<i64> {
    let mut list = IntList::from_values(input.iter().copied()).unwrap();
    bubble_sort(&mut list);
    list.iter().collect()
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test sorting an unsorted list.
#[test]
fn test_bubble_basic() {
    assert_eq!(sorted_by(&[99, 5, 42]), vec![5, 42, 99]);
    assert_eq!(sorted_by(&[42, 17, 99, 5]), vec![5, 17, 42, 99]);
}

/// Test sorting reverse-ordered input.
#[test]
fn test_bubble_reverse() {
    assert_eq!(sorted_by(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
}

/// Test that sorted input is left observably unchanged.
#[test]
fn test_bubble_already_sorted() {
    assert_eq!(sorted_by(&[5, 42, 99]), vec![5, 42, 99]);
    assert_eq!(sorted_by(&[1, 2, 3, 4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
}

/// Test sorting with negative values.
#[test]
fn test_bubble_negative_values() {
    assert_eq!(sorted_by(&[0, -5, 3, -1]), vec![-5, -1, 0, 3]);
}

/// Test that the length survives sorting.
#[test]
fn test_bubble_preserves_len() {
    let mut list = IntList::from_values([3, 1, 2]).unwrap();
    bubble_sort(&mut list);

    assert_eq!(list.len(), 3);
    assert!(list.is_sorted());
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Test that an empty list is a no-op.
#[test]
fn test_bubble_empty() {
    let mut list = IntList::new();
    bubble_sort(&mut list);

    assert!(list.is_empty());
    assert!(list.is_sorted());
}

/// Test that a single-element list is a no-op.
#[test]
fn test_bubble_single() {
    assert_eq!(sorted_by(&[7]), vec![7]);
}

/// Test both orderings of a pair.
#[test]
fn test_bubble_pair() {
    assert_eq!(sorted_by(&[2, 1]), vec![1, 2]);
    assert_eq!(sorted_by(&[1, 2]), vec![1, 2]);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test the equal-element scenario.
///
/// Adjacent swaps fire only on strict inequality, so equal values never
/// trade places.
#[test]
fn test_bubble_duplicates() {
    assert_eq!(sorted_by(&[3, 1, 3, 2]), vec![1, 2, 3, 3]);
    assert_eq!(sorted_by(&[5, 5, 5]), vec![5, 5, 5]);
}

// ============================================================================
// Randomized Tests
// ============================================================================

/// Test seeded random inputs against the standard sort.
#[test]
fn test_bubble_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xB0BB1E);
    for len in [0, 1, 2, 3, 7, 25, 64] {
        let input: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..=50)).collect();

        let mut expected = input.clone();
        expected.sort();

        assert_eq!(sorted_by(&input), expected, "len = {len}");
    }
}
