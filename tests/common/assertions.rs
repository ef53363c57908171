//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons and break sequences.

#![allow(dead_code)]

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two arrays of floating-point values are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the arrays have different lengths or if any element-wise comparison fails.
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {:?}, expected = {:?}",
        actual,
        expected
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= eps,
            "Arrays differ at index {}: actual = {}, expected = {}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert that a break sequence is non-decreasing, lies within the sample
/// range and ends at the sample maximum.
pub fn assert_valid_breaks(breaks: &[f64], sample: &[f64]) {
    assert!(!breaks.is_empty(), "Break sequence is empty");
    assert!(
        breaks.iter().all(|b| b.is_finite()),
        "Break sequence has non-finite values: {:?}",
        breaks
    );
    assert!(
        breaks.windows(2).all(|w| w[0] <= w[1]),
        "Break sequence is not ascending: {:?}",
        breaks
    );

    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(
        breaks[0] >= min && breaks[breaks.len() - 1] <= max,
        "Breaks {:?} leave the sample range [{}, {}]",
        breaks,
        min,
        max
    );
    assert_eq!(
        breaks[breaks.len() - 1],
        max,
        "Breaks {:?} do not end at the sample maximum",
        breaks
    );
}
