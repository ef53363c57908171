//! Classification of raster bands.
//!
//! Raster bands differ from vector attributes in two ways: pixels equal to
//! the no-data value must not take part in the classification, and the
//! number of stops depends on how the renderer interpolates between them.
//! A linear ramp needs a stop at both ends of the range, a discrete or exact
//! one needs one upper bound per class.

use tracing::debug;

use super::equal_interval::{equal_interval_breaks, step_point};
use super::{extrema, sorted};
use crate::error::{ensure_finite, Result, SymbologyError};
use crate::expression::InterpolationMode;

/// Quantile breaks over band values by counting pixels into bins.
///
/// Pixels equal to `no_data` are skipped. The result always has `classes`
/// entries and ends at the largest valid pixel value.
pub fn band_quantile_breaks(
    values: &[f64],
    classes: usize,
    mode: InterpolationMode,
    no_data: Option<f64>,
) -> Result<Vec<f64>> {
    if classes < 1 {
        return Err(SymbologyError::InvalidClassCount { requested: classes });
    }
    ensure_finite(values, "band")?;

    let valid: Vec<f64> = match no_data {
        Some(nd) => values.iter().copied().filter(|&v| v != nd).collect(),
        None => values.to_vec(),
    };
    let valid = sorted(&valid);

    let (min, max) = match (valid.first(), valid.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => {
            return Err(SymbologyError::EmptySample {
                method: "band_quantile".to_string(),
            })
        }
    };
    if min == max {
        return Ok(vec![min; classes]);
    }

    let mut breaks = Vec::with_capacity(classes);
    let len = valid.len() as f64;

    // A linear ramp anchors its first stop at the minimum
    let linear = mode == InterpolationMode::Linear && classes > 1;
    let (values_per_bin, start, mut in_bin) = if linear {
        breaks.push(min);
        (len / (classes - 1) as f64, 1, 1.0)
    } else {
        (len / classes as f64, 0, 0.0)
    };

    for &value in &valid[start..] {
        if in_bin + 1.0 < values_per_bin {
            in_bin += 1.0;
        } else {
            breaks.push(value);
            in_bin = 0.0;
        }
    }

    breaks.truncate(classes);
    if breaks.len() == classes {
        if let Some(last) = breaks.last_mut() {
            *last = max;
        }
    } else {
        breaks.resize(classes, max);
    }

    debug!(
        pixels = values.len(),
        valid_pixels = valid.len(),
        classes = classes,
        mode = %mode,
        "Computed band quantile breaks"
    );

    Ok(breaks)
}

/// Equal interval breaks from band statistics.
///
/// Discrete and exact modes get one upper bound per class. Linear mode gets
/// `classes` evenly spaced stops from `min` to `max` inclusive.
pub fn range_breaks(
    min: f64,
    max: f64,
    classes: usize,
    mode: InterpolationMode,
) -> Result<Vec<f64>> {
    if classes < 1 {
        return Err(SymbologyError::InvalidClassCount { requested: classes });
    }
    ensure_finite(&[min, max], "band range")?;
    if min > max {
        return Err(SymbologyError::InvalidParameter {
            param: "range".to_string(),
            message: format!("min ({}) must be <= max ({})", min, max),
        });
    }

    let breaks = match mode {
        InterpolationMode::Linear if classes > 1 => {
            (0..classes)
                .map(|i| {
                    if i == classes - 1 {
                        max
                    } else {
                        step_point(min, max, i, classes - 1)
                    }
                })
                .collect()
        }
        InterpolationMode::Linear => vec![max],
        InterpolationMode::Discrete | InterpolationMode::Exact => {
            equal_interval_breaks(min, max, classes)
        }
    };

    Ok(breaks)
}

/// Band range breaks computed from the band values themselves
pub fn band_range_breaks(
    values: &[f64],
    classes: usize,
    mode: InterpolationMode,
    no_data: Option<f64>,
) -> Result<Vec<f64>> {
    ensure_finite(values, "band")?;
    let valid: Vec<f64> = match no_data {
        Some(nd) => values.iter().copied().filter(|&v| v != nd).collect(),
        None => values.to_vec(),
    };
    let (min, max) = extrema(&valid).ok_or_else(|| SymbologyError::EmptySample {
        method: "band_range".to_string(),
    })?;
    range_breaks(min, max, classes, mode)
}
