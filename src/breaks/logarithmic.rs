//! Logarithmic classification.
//!
//! Equal intervals in `log10` space between the sample extrema, mapped back
//! to data units. Suited to data spanning several orders of magnitude.

use super::Classifier;
use crate::error::{Result, SymbologyError};

/// Logarithmic classifier
pub struct LogarithmicClassifier;

impl Classifier for LogarithmicClassifier {
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
        Ok(logarithmic_breaks(sorted[0], sorted[sorted.len() - 1], classes))
    }

    fn validate(&self, sorted: &[f64]) -> Result<()> {
        // The sample is sorted, so checking the minimum covers every value
        match sorted.first() {
            Some(&value) if value <= 0.0 => Err(SymbologyError::NonPositiveValue { value }),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "logarithmic"
    }
}

/// Breaks at `10^(log10(min) + i * step)` for `i` in `1..=classes`.
///
/// Both `min` and `max` must be positive.
pub fn logarithmic_breaks(min: f64, max: f64, classes: usize) -> Vec<f64> {
    let log_min = min.log10();
    let log_max = max.log10();
    let step = (log_max - log_min) / classes as f64;

    (1..=classes)
        .map(|i| {
            if i == classes {
                max
            } else {
                10f64.powf(log_min + i as f64 * step)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logarithmic_decades() {
        let breaks = logarithmic_breaks(1.0, 10000.0, 4);
        let expected = [10.0, 100.0, 1000.0, 10000.0];
        assert_eq!(breaks.len(), 4);
        for (b, e) in breaks.iter().zip(expected.iter()) {
            assert!((b - e).abs() / e < 1e-12, "{} != {}", b, e);
        }
    }

    #[test]
    fn test_logarithmic_rejects_non_positive() {
        let classifier = LogarithmicClassifier;
        assert!(matches!(
            classifier.validate(&[0.0, 1.0]),
            Err(SymbologyError::NonPositiveValue { value }) if value == 0.0
        ));
        assert!(classifier.validate(&[-3.0, 5.0]).is_err());
        assert!(classifier.validate(&[0.5, 5.0]).is_ok());
    }

    #[test]
    fn test_logarithmic_ends_at_maximum() {
        let breaks = logarithmic_breaks(2.0, 731.0, 3);
        assert_eq!(breaks[2], 731.0);
        assert!(breaks[0] > 2.0 && breaks[0] < breaks[1]);
    }
}
