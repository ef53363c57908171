//! Error types for the symbology engine.
//!
//! Every failure is local to a single classification request. Nothing here
//! is converted into a placeholder value: a bad input always surfaces as one
//! of these variants so that a broken style is never persisted.

use thiserror::Error;

/// The main error type for symbology operations.
#[derive(Error, Debug)]
pub enum SymbologyError {
    /// Fewer than one class was requested
    #[error("Invalid class count: {requested} (at least 1 class is required)")]
    InvalidClassCount { requested: usize },

    /// The sample has no values but the method needs a minimum/maximum
    #[error("Empty sample: method '{method}' needs at least one value")]
    EmptySample { method: String },

    /// A scale context whose min equals its max cannot be inverted
    #[error("Degenerate range: min and max are both {value}")]
    DegenerateRange { value: f64 },

    /// Logarithmic classification got a value that is zero or negative
    #[error("Non-positive value {value}: logarithmic breaks need values > 0")]
    NonPositiveValue { value: f64 },

    /// A sample value, threshold or range bound is NaN or infinite
    #[error("Non-finite value in {context}: {value}")]
    NonFiniteValue { context: String, value: f64 },

    /// The ramp name is not in the catalog
    #[error("Unknown color ramp: {name}")]
    UnknownRamp { name: String },

    /// Breaks and colors cannot be paired positionally
    #[error("Length mismatch: {breaks} breaks but {colors} colors")]
    LengthMismatch { breaks: usize, colors: usize },

    /// A stop index does not exist in the list
    #[error("Index out of range: {index} (list has {len} stops)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A color literal could not be parsed
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    /// A renderer expression does not have a recognised shape
    #[error("Invalid expression: {message}")]
    InvalidExpression { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SymbologyError
pub type Result<T> = std::result::Result<T, SymbologyError>;

/// Reject NaN and infinite values before they reach any arithmetic.
pub(crate) fn ensure_finite(values: &[f64], context: &str) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(SymbologyError::NonFiniteValue {
            context: context.to_string(),
            value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, -2.5, 0.0], "sample").is_ok());
        assert!(ensure_finite(&[], "sample").is_ok());

        let err = ensure_finite(&[1.0, f64::NAN], "sample").unwrap_err();
        assert!(matches!(err, SymbologyError::NonFiniteValue { .. }));

        let err = ensure_finite(&[f64::INFINITY], "range").unwrap_err();
        assert!(err.to_string().contains("range"));
    }

    #[test]
    fn test_error_messages() {
        let err = SymbologyError::LengthMismatch {
            breaks: 4,
            colors: 5,
        };
        assert_eq!(err.to_string(), "Length mismatch: 4 breaks but 5 colors");

        let err = SymbologyError::UnknownRamp {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown color ramp: nope");
    }
}
