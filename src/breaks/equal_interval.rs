//! Equal interval classification.

use super::Classifier;
use crate::error::Result;

/// Equal interval classifier
pub struct EqualIntervalClassifier;

impl Classifier for EqualIntervalClassifier {
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
        Ok(equal_interval_breaks(sorted[0], sorted[sorted.len() - 1], classes))
    }

    fn name(&self) -> &str {
        "equal_interval"
    }
}

/// Breaks at `min + i * (max - min) / classes` for `i` in `1..=classes`.
///
/// The last break is pinned to `max` so accumulated rounding never leaves
/// the maximum outside the final class.
pub fn equal_interval_breaks(min: f64, max: f64, classes: usize) -> Vec<f64> {
    (1..=classes)
        .map(|i| {
            if i == classes {
                max
            } else {
                step_point(min, max, i, classes)
            }
        })
        .collect()
}

/// The `i`-th of `divisions` even steps from `min` towards `max`.
///
/// Finite bounds can still span more than `f64::MAX`; such ranges are
/// blended from both ends so no intermediate overflows.
pub(crate) fn step_point(min: f64, max: f64, i: usize, divisions: usize) -> f64 {
    let span = max - min;
    if span.is_finite() {
        min + i as f64 * (span / divisions as f64)
    } else {
        let t = i as f64 / divisions as f64;
        min * (1.0 - t) + max * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_interval_boundary() {
        assert_eq!(
            equal_interval_breaks(0.0, 100.0, 5),
            vec![20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn test_equal_interval_negative_range() {
        assert_eq!(
            equal_interval_breaks(-10.0, 10.0, 4),
            vec![-5.0, 0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn test_equal_interval_pins_maximum() {
        let breaks = equal_interval_breaks(0.1, 0.7, 3);
        assert_eq!(breaks.len(), 3);
        assert_eq!(breaks[2], 0.7);
    }

    #[test]
    fn test_equal_interval_span_beyond_f64_max() {
        let breaks = equal_interval_breaks(-1e308, 1e308, 4);
        assert!(breaks.iter().all(|b| b.is_finite()), "{:?}", breaks);
        assert!(breaks.windows(2).all(|w| w[0] < w[1]), "{:?}", breaks);
        assert!((breaks[0] + 5e307).abs() / 5e307 < 1e-12);
        assert_eq!(breaks[1], 0.0);
        assert_eq!(breaks[3], 1e308);
    }
}
