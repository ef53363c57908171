//! Pretty classification.
//!
//! Picks a rounded step (1, 2 or 5 times a power of ten) that divides the
//! sample range into roughly the requested number of classes, the same way
//! R's `pretty()` chooses axis ticks. Breaks are multiples of that step,
//! clamped to the sample range.

use super::Classifier;
use crate::error::Result;

/// Bias towards the larger of two candidate units
const HIGH_BIAS: f64 = 1.5;
/// Shrink factor applied to tiny ranges
const SHRINK: f64 = 0.75;
/// Relative tolerance used when comparing against the range ends
const EPS: f64 = 1e-7;

/// Pretty classifier
pub struct PrettyClassifier;

impl Classifier for PrettyClassifier {
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>> {
        Ok(pretty_breaks(sorted[0], sorted[sorted.len() - 1], classes))
    }

    fn name(&self) -> &str {
        "pretty"
    }
}

/// Rounded breaks covering `[min, max]` in approximately `classes` steps
pub fn pretty_breaks(min: f64, max: f64, classes: usize) -> Vec<f64> {
    if classes < 1 {
        return vec![max];
    }

    // Work at half scale when the span itself overflows; doubling is exact
    if !(max - min).is_finite() {
        return pretty_breaks(min / 2.0, max / 2.0, classes)
            .into_iter()
            .map(|b| b * 2.0)
            .collect();
    }

    let unit = pretty_unit(min, max, classes);
    let minimum_count = (classes / 3) as f64;

    let mut start = (min / unit + EPS).floor();
    let mut end = (max / unit - EPS).ceil();

    while start * unit > min + EPS * unit {
        start -= 1.0;
    }
    while end * unit < max - EPS * unit {
        end += 1.0;
    }

    // Widen the span when it holds too few steps
    let k = (0.5 + end - start).floor();
    if k < minimum_count {
        let k = minimum_count - k;
        if start >= 0.0 {
            end += k / 2.0;
            start = start - k / 2.0 + k % 2.0;
        } else {
            start -= k / 2.0;
            end = end + k / 2.0 + k % 2.0;
        }
    }

    let minimum_break = start * unit;
    let count = end - start;

    let mut breaks = Vec::new();
    let mut i = 1.0;
    while i < count + 1.0 {
        breaks.push(minimum_break + i * unit);
        i += 1.0;
    }

    if breaks.is_empty() {
        return vec![max];
    }

    // A widened span can overshoot the data on either side
    for b in breaks.iter_mut() {
        *b = b.clamp(min, max);
    }
    let last = breaks.len() - 1;
    breaks[last] = max;

    // Snap the break closest to zero onto zero when the range straddles it
    if min < 0.0 && max > 0.0 && last > 0 {
        let closest = breaks[..last]
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
            .map(|(i, _)| i);
        if let Some(index) = closest {
            breaks[index] = 0.0;
        }
    }

    breaks
}

/// The rounded step size for `classes` divisions of `[min, max]`
fn pretty_unit(min: f64, max: f64, classes: usize) -> f64 {
    let adjust_bias = 0.5 + 1.5 * HIGH_BIAS;
    let divisions = classes as f64;
    let minimum_count = (classes / 3) as f64;
    let dx = max - min;

    let u = if adjust_bias >= 1.5 * HIGH_BIAS + 0.5 {
        1.0 + 1.0 / (1.0 + HIGH_BIAS)
    } else {
        1.0 + 1.5 / (1.0 + adjust_bias)
    };

    let mut cell = min.abs().max(max.abs());
    let small = dx < cell * (u * divisions.max(1.0) * EPS * 3.0);

    if small {
        if cell > 10.0 {
            cell = (9.0 + cell / 10.0) * SHRINK;
        }
        if minimum_count > 1.0 {
            cell /= minimum_count;
        }
    } else {
        cell = dx;
        if divisions > 1.0 {
            cell /= divisions;
        }
    }
    if cell < 20.0 * EPS {
        cell = 20.0 * EPS;
    }

    let base = 10f64.powf(cell.log10().floor());
    let mut unit = base;
    if 2.0 * base - cell < HIGH_BIAS * (cell - unit) {
        unit = 2.0 * base;
        if 5.0 * base - cell < adjust_bias * (cell - unit) {
            unit = 5.0 * base;
            if 10.0 * base - cell < HIGH_BIAS * (cell - unit) {
                unit = 10.0 * base;
            }
        }
    }
    unit
}
