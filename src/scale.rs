//! Linear mapping between normalized stop thresholds and a data range.
//!
//! Raster renderers see band values normalized to `[0, 1]`, while users
//! author stops in real data units. A [`ScaleContext`] carries the min/max
//! that links the two, so a stop list can be authored once and replayed
//! after the clamp range changes.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SymbologyError};

/// The real data range a normalized value maps onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleContext {
    /// Value that normalized `0.0` maps to
    pub min: f64,
    /// Value that normalized `1.0` maps to
    pub max: f64,
}

impl ScaleContext {
    /// Create a context, rejecting non-finite bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        ensure_finite(&[min, max], "scale range")?;
        Ok(Self { min, max })
    }

    /// Build a context from the extrema of a sample
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        ensure_finite(values, "sample")?;
        let (min, max) = crate::breaks::extrema(values).ok_or_else(|| {
            SymbologyError::EmptySample {
                method: "scale".to_string(),
            }
        })?;
        Ok(Self { min, max })
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a normalized value onto the real range
    pub fn scale(&self, normalized: f64) -> f64 {
        scale(normalized, self)
    }

    /// Map a real value back to the normalized range
    pub fn unscale(&self, real: f64) -> Result<f64> {
        unscale(real, self)
    }
}

/// `ctx.min + normalized * (ctx.max - ctx.min)`
pub fn scale(normalized: f64, ctx: &ScaleContext) -> f64 {
    ctx.min + normalized * ctx.span()
}

/// `(real - ctx.min) / (ctx.max - ctx.min)`, failing when the range is empty
pub fn unscale(real: f64, ctx: &ScaleContext) -> Result<f64> {
    if ctx.max == ctx.min {
        return Err(SymbologyError::DegenerateRange { value: ctx.min });
    }
    Ok((real - ctx.min) / ctx.span())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        let ctx = ScaleContext::new(10.0, 50.0).unwrap();
        assert_eq!(ctx.scale(0.0), 10.0);
        assert_eq!(ctx.scale(1.0), 50.0);
        assert_eq!(ctx.scale(0.5), 30.0);
    }

    #[test]
    fn test_unscale_endpoints() {
        let ctx = ScaleContext::new(10.0, 50.0).unwrap();
        assert_eq!(ctx.unscale(10.0).unwrap(), 0.0);
        assert_eq!(ctx.unscale(50.0).unwrap(), 1.0);
        // Values outside the range extrapolate rather than clamp
        assert_eq!(ctx.unscale(90.0).unwrap(), 2.0);
    }

    #[test]
    fn test_round_trip_grid() {
        let ctx = ScaleContext::new(10.0, 50.0).unwrap();
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = unscale(scale(v, &ctx), &ctx).unwrap();
            assert!((back - v).abs() < 1e-9, "round trip failed for {}", v);
        }
    }

    #[test]
    fn test_degenerate_range() {
        let ctx = ScaleContext::new(7.0, 7.0).unwrap();
        // Scaling is still defined, unscaling is not
        assert_eq!(ctx.scale(0.3), 7.0);
        assert!(matches!(
            ctx.unscale(7.0),
            Err(SymbologyError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(ScaleContext::new(f64::NAN, 1.0).is_err());
        assert!(ScaleContext::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_sample() {
        let ctx = ScaleContext::from_sample(&[3.0, -1.0, 8.0]).unwrap();
        assert_eq!(ctx, ScaleContext { min: -1.0, max: 8.0 });
        assert!(ScaleContext::from_sample(&[]).is_err());
    }
}
