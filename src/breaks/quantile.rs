//! Quantile classification.
//!
//! The q-th quantile is the value with a `q` fraction of the sample below it,
//! computed with the weighted percentile formula
//! `Xq = (1 - r) * X[floor(a)] + r * X[floor(a) + 1]` where `a = q * (len - 1)`.

use super::Classifier;
use crate::error::Result;

/// Quantile classifier
pub struct QuantileClassifier;

impl Classifier for QuantileClassifier {
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
        Ok(quantile_breaks(sorted, classes))
    }

    fn name(&self) -> &str {
        "quantile"
    }
}

/// Weighted percentile breaks for an ascending, non-empty sample
pub fn quantile_breaks(sorted: &[f64], classes: usize) -> Vec<f64> {
    let len = sorted.len();
    let mut breaks = Vec::with_capacity(classes);

    // A single value is its own quantile at every q
    let mut xq = sorted[0];

    for i in 1..classes {
        if len > 1 {
            let q = i as f64 / classes as f64;
            let a = q * (len - 1) as f64;
            let floor = a.floor() as usize;
            let r = a - floor as f64;

            let upper = sorted[(floor + 1).min(len - 1)];
            xq = (1.0 - r) * sorted[floor] + r * upper;
        }
        breaks.push(xq);
    }

    breaks.push(sorted[len - 1]);
    breaks
}
