//! Natural breaks (Jenks) classification.
//!
//! Fisher's exact optimization by dynamic programming: partition the sorted
//! sample into contiguous groups minimizing the total within-group sum of
//! squared deviations. Runs in `O(len^2 * classes)` time.

use super::Classifier;
use crate::error::{Result, SymbologyError};

/// Scaled values stay within this power of two, so squares and their sums
/// never overflow
const MAX_EXPONENT: i32 = 1000;

/// Natural breaks classifier
pub struct JenksClassifier;

impl Classifier for JenksClassifier {
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
        jenks_breaks(sorted, classes)
    }

    fn name(&self) -> &str {
        "natural_breaks"
    }
}

/// Upper bound of each optimal class for an ascending, non-empty sample
pub fn jenks_breaks(sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
    let n = sorted.len();
    let max = sorted[n - 1];

    if classes <= 1 {
        return Ok(vec![max]);
    }

    // Every value gets its own class; the remainder repeat the maximum
    if classes >= n {
        let mut breaks = sorted.to_vec();
        breaks.resize(classes, max);
        return Ok(breaks);
    }

    let values = normalized(sorted);

    // lower[l][j]: number of values below class j in the best partition of
    // the first l values into j classes. cost[l][j]: that partition's cost.
    let mut lower = vec![vec![0usize; classes + 1]; n + 1];
    let mut cost = vec![vec![f64::MAX; classes + 1]; n + 1];

    for j in 1..=classes {
        cost[0][j] = 0.0;
    }
    // A single value in a single class has no spread. Fewer values than
    // classes stays at f64::MAX so no partition ever leaves a class empty.
    cost[1][1] = 0.0;

    for l in 2..=n {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut count = 0.0;
        let mut variance = 0.0;

        // Grow the last class downward from value l
        for m in 1..=l {
            let first = l - m + 1;
            let val = values[first - 1];

            sum_sq += val * val;
            sum += val;
            count += 1.0;

            variance = sum_sq - (sum * sum) / count;
            let below = first - 1;
            if below != 0 {
                for j in 2..=classes {
                    let candidate = variance + cost[below][j - 1];
                    // Ties resolve to the lowest boundary
                    if cost[l][j] >= candidate {
                        lower[l][j] = below;
                        cost[l][j] = candidate;
                    }
                }
            }
        }

        lower[l][1] = 0;
        cost[l][1] = variance;
    }

    let mut breaks = vec![0.0; classes];
    breaks[classes - 1] = max;

    let mut k = n;
    for j in (2..=classes).rev() {
        let below = lower[k][j];
        if below == 0 {
            return Err(SymbologyError::NonFiniteValue {
                context: "natural breaks cost".to_string(),
                value: cost[n][classes],
            });
        }
        breaks[j - 2] = sorted[below - 1];
        k = below;
    }

    Ok(breaks)
}

/// Rescale by a power of two into `[-16, 16]`, then center on the mean.
///
/// Both steps keep the optimal partition unchanged. The power-of-two factor
/// is exact, and centering removes the cancellation in `sum_sq - sum^2 / n`.
fn normalized(sorted: &[f64]) -> Vec<f64> {
    let magnitude = sorted
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    if magnitude == 0.0 {
        return sorted.to_vec();
    }

    let exponent = (magnitude.log2().ceil() as i32).clamp(-MAX_EXPONENT, MAX_EXPONENT);
    let factor = 2f64.powi(-exponent);
    let scaled: Vec<f64> = sorted.iter().map(|v| v * factor).collect();

    let mean = scaled.iter().sum::<f64>() / scaled.len() as f64;
    scaled.into_iter().map(|v| v - mean).collect()
}
