//! Test data generation utilities.
//!
//! This module provides deterministic samples with known shapes for
//! exercising the classification methods.

#![allow(dead_code)]

/// The integers `1..=n` as floats
pub fn linear_sample(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Three tight, well separated clusters around 10, 50 and 90
pub fn clustered_sample() -> Vec<f64> {
    vec![
        9.0, 10.0, 11.0, 10.5, 9.5, //
        49.0, 50.0, 51.0, 50.5, //
        89.0, 90.0, 91.0, 90.5, 89.5,
    ]
}

/// Values spanning several orders of magnitude
pub fn skewed_sample() -> Vec<f64> {
    vec![
        1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 144.0, 233.0, 377.0, 610.0, 987.0,
    ]
}

/// A pseudo-random but reproducible sample of `n` values in `[0, 1000)`
pub fn lcg_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 1_000_000) as f64 / 1000.0
        })
        .collect()
}

/// Raster pixels with a no-data border of zeros around a 1..=16 gradient
pub fn band_with_border() -> Vec<f64> {
    let mut pixels = vec![0.0; 8];
    pixels.extend((1..=16).map(|v| v as f64));
    pixels.extend(vec![0.0; 8]);
    pixels
}
