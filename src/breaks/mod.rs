//! Classification algorithms that turn a sample into class breaks.
//!
//! Every method returns an ascending break sequence whose final entry is the
//! sample maximum. Quantile, equal interval, natural breaks and logarithmic
//! return exactly one break per class; pretty returns its natural count of
//! rounded breaks.

pub mod equal_interval;
pub mod jenks;
pub mod logarithmic;
pub mod pretty;
pub mod quantile;
pub mod raster;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ensure_finite, Result, SymbologyError};

/// Trait for classification methods
pub trait Classifier: Send + Sync {
    /// Compute breaks for a sorted, finite sample with at least two distinct values
    fn classify(&self, sorted: &[f64], classes: usize) -> Result<Vec<f64>>;

    /// Reject samples this method cannot handle
    fn validate(&self, _sorted: &[f64]) -> Result<()> {
        Ok(())
    }

    /// Get the name of this classification method
    fn name(&self) -> &str;
}

/// The available classification methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Weighted percentile breaks
    Quantile,
    /// Evenly spaced breaks between the sample extrema
    EqualInterval,
    /// Jenks/Fisher optimal 1-D clustering
    NaturalBreaks,
    /// Rounded 1-2-5 breaks
    Pretty,
    /// Evenly spaced breaks in log10 space
    Logarithmic,
}

impl ClassificationMethod {
    /// All methods, in display order
    pub const ALL: [ClassificationMethod; 5] = [
        ClassificationMethod::Quantile,
        ClassificationMethod::EqualInterval,
        ClassificationMethod::NaturalBreaks,
        ClassificationMethod::Pretty,
        ClassificationMethod::Logarithmic,
    ];

    /// Canonical name of the method
    pub fn name(&self) -> &'static str {
        match self {
            ClassificationMethod::Quantile => "quantile",
            ClassificationMethod::EqualInterval => "equal_interval",
            ClassificationMethod::NaturalBreaks => "natural_breaks",
            ClassificationMethod::Pretty => "pretty",
            ClassificationMethod::Logarithmic => "logarithmic",
        }
    }

    /// Get the classifier implementing this method
    pub fn classifier(&self) -> Box<dyn Classifier> {
        match self {
            ClassificationMethod::Quantile => Box::new(quantile::QuantileClassifier),
            ClassificationMethod::EqualInterval => {
                Box::new(equal_interval::EqualIntervalClassifier)
            }
            ClassificationMethod::NaturalBreaks => Box::new(jenks::JenksClassifier),
            ClassificationMethod::Pretty => Box::new(pretty::PrettyClassifier),
            ClassificationMethod::Logarithmic => Box::new(logarithmic::LogarithmicClassifier),
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassificationMethod {
    type Err = SymbologyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accept the labels used in style files as well as the canonical names
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "quantile" => Ok(ClassificationMethod::Quantile),
            "equal_interval" => Ok(ClassificationMethod::EqualInterval),
            "natural_breaks" | "jenks" => Ok(ClassificationMethod::NaturalBreaks),
            "pretty" => Ok(ClassificationMethod::Pretty),
            "logarithmic" | "log" => Ok(ClassificationMethod::Logarithmic),
            _ => Err(SymbologyError::InvalidParameter {
                param: "method".to_string(),
                message: format!("Unknown classification method: {}", s),
            }),
        }
    }
}

/// Get a classifier by name
pub fn get_classifier(name: &str) -> Result<Box<dyn Classifier>> {
    Ok(name.parse::<ClassificationMethod>()?.classifier())
}

/// Compute `classes` breaks for `sample` with the given method.
///
/// Fails with [`SymbologyError::InvalidClassCount`] when `classes` is zero,
/// [`SymbologyError::EmptySample`] when there are no values and
/// [`SymbologyError::NonFiniteValue`] when any value is NaN or infinite.
/// A sample whose values are all equal yields that value for every class.
pub fn compute_breaks(
    sample: &[f64],
    classes: usize,
    method: ClassificationMethod,
) -> Result<Vec<f64>> {
    if classes < 1 {
        return Err(SymbologyError::InvalidClassCount { requested: classes });
    }
    if sample.is_empty() {
        return Err(SymbologyError::EmptySample {
            method: method.name().to_string(),
        });
    }
    ensure_finite(sample, "sample")?;

    let classifier = method.classifier();
    let sorted = sorted(sample);
    classifier.validate(&sorted)?;

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    let breaks = if first == last {
        vec![first; classes]
    } else {
        classifier.classify(&sorted, classes)?
    };
    ensure_finite(&breaks, "breaks")?;

    debug!(
        method = classifier.name(),
        sample_len = sample.len(),
        classes = classes,
        break_count = breaks.len(),
        "Computed class breaks"
    );

    Ok(breaks)
}

/// Sorted distinct values of a sample, for categorized classification
pub fn unique_values(sample: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(SymbologyError::EmptySample {
            method: "categorized".to_string(),
        });
    }
    ensure_finite(sample, "sample")?;

    let mut values = sorted(sample);
    values.dedup();
    Ok(values)
}

/// Minimum and maximum of a sample, `None` when it is empty
pub fn extrema(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

/// Ascending copy of the sample
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "quantile".parse::<ClassificationMethod>().unwrap(),
            ClassificationMethod::Quantile
        );
        assert_eq!(
            "equal interval".parse::<ClassificationMethod>().unwrap(),
            ClassificationMethod::EqualInterval
        );
        assert_eq!(
            "Jenks".parse::<ClassificationMethod>().unwrap(),
            ClassificationMethod::NaturalBreaks
        );
        assert_eq!(
            "natural-breaks".parse::<ClassificationMethod>().unwrap(),
            ClassificationMethod::NaturalBreaks
        );
        assert!("continuous".parse::<ClassificationMethod>().is_err());
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in ClassificationMethod::ALL {
            assert_eq!(method.name().parse::<ClassificationMethod>().unwrap(), method);
            assert_eq!(method.classifier().name(), method.name());
        }
    }

    #[test]
    fn test_get_classifier() {
        assert_eq!(get_classifier("pretty").unwrap().name(), "pretty");
        assert!(get_classifier("bogus").is_err());
    }

    #[test]
    fn test_invalid_class_count() {
        for method in ClassificationMethod::ALL {
            let err = compute_breaks(&[1.0, 2.0], 0, method).unwrap_err();
            assert!(matches!(err, SymbologyError::InvalidClassCount { requested: 0 }));
        }
    }

    #[test]
    fn test_empty_sample() {
        for method in ClassificationMethod::ALL {
            let err = compute_breaks(&[], 3, method).unwrap_err();
            assert!(matches!(err, SymbologyError::EmptySample { .. }));
        }
    }

    #[test]
    fn test_single_value_sample() {
        for method in ClassificationMethod::ALL {
            for classes in 1..6 {
                let breaks = compute_breaks(&[5.0], classes, method).unwrap();
                assert_eq!(breaks, vec![5.0; classes], "method {}", method);
            }
        }
    }

    #[test]
    fn test_non_finite_sample() {
        let err = compute_breaks(&[1.0, f64::NAN, 3.0], 2, ClassificationMethod::Quantile)
            .unwrap_err();
        assert!(matches!(err, SymbologyError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_breaks_end_at_maximum() {
        let sample = [4.0, 1.0, 9.0, 16.0, 25.0, 2.0, 7.0, 30.0];
        for method in ClassificationMethod::ALL {
            let breaks = compute_breaks(&sample, 4, method).unwrap();
            assert_eq!(*breaks.last().unwrap(), 30.0, "method {}", method);
            assert!(
                breaks.windows(2).all(|w| w[0] <= w[1]),
                "method {} not ascending: {:?}",
                method,
                breaks
            );
            assert!(breaks[0] >= 1.0, "method {} below minimum", method);
        }
    }

    #[test]
    fn test_unique_values() {
        let values = unique_values(&[3.0, 1.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert!(unique_values(&[]).is_err());
    }

    #[test]
    fn test_extrema() {
        assert_eq!(extrema(&[3.0, -2.0, 8.5]), Some((-2.0, 8.5)));
        assert_eq!(extrema(&[]), None);
    }
}
