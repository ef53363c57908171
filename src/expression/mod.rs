//! Renderer style expressions.
//!
//! A classified stop list becomes one of three expression shapes depending
//! on the interpolation mode:
//!
//! - `linear`: `["interpolate", ["linear"], input, t0, c0, t1, c1, ...]`
//! - `discrete`: `["case", ["<=", input, t0], c0, ..., fallback]`
//! - `exact`: `["case", ["==", input, t0], c0, ..., fallback]`
//!
//! [`Expression`] models these as a sum type so a malformed shape cannot be
//! built. The [`adapter`] module converts to and from the nested JSON arrays
//! that renderers consume.

pub mod adapter;
pub mod builder;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::colormaps::Color;
use crate::error::SymbologyError;

pub use adapter::stops_from_value;
pub use builder::{build_expression, ExpressionBuilder};

/// How the renderer maps values between stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Blend colors between neighbouring stops
    #[default]
    Linear,
    /// Each stop colors everything up to and including its threshold
    Discrete,
    /// Each stop colors only values equal to its threshold
    Exact,
}

impl InterpolationMode {
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::Linear => "linear",
            InterpolationMode::Discrete => "discrete",
            InterpolationMode::Exact => "exact",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMode {
    type Err = SymbologyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(InterpolationMode::Linear),
            "discrete" => Ok(InterpolationMode::Discrete),
            "exact" => Ok(InterpolationMode::Exact),
            _ => Err(SymbologyError::InvalidParameter {
                param: "interpolation".to_string(),
                message: format!("Unknown interpolation mode: {}", s),
            }),
        }
    }
}

/// The value an expression reads from each pixel or feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    /// A raster band, 1-based
    Band(u32),
    /// A vector feature property
    Property(String),
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Band(n) => write!(f, "band{}", n),
            FieldRef::Property(name) => f.write_str(name),
        }
    }
}

/// Sentinel value rendered with a dedicated color, ahead of all stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoData {
    pub value: f64,
    pub color: Color,
}

impl NoData {
    /// A sentinel drawn fully transparent
    pub fn transparent(value: f64) -> Self {
        Self {
            value,
            color: Color::transparent(),
        }
    }
}

impl Default for NoData {
    fn default() -> Self {
        Self::transparent(0.0)
    }
}

/// Condition operator of a `case` branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessOrEqual,
    Equal,
}

impl Comparison {
    /// Operator tag in the renderer's array form
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::LessOrEqual => "<=",
            Comparison::Equal => "==",
        }
    }
}

/// One `condition → color` arm of a `case` expression
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub threshold: f64,
    pub color: Color,
}

/// A renderer style expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Linear color interpolation between ascending stops
    Interpolate {
        input: FieldRef,
        no_data: Option<NoData>,
        stops: Vec<(f64, Color)>,
    },
    /// First matching branch wins, `fallback` when none match. Every branch
    /// after the guard uses `comparison`.
    Case {
        input: FieldRef,
        no_data: Option<NoData>,
        comparison: Comparison,
        branches: Vec<CaseBranch>,
        fallback: Color,
    },
}

impl Expression {
    /// The interpolation mode that produces this shape
    pub fn mode(&self) -> InterpolationMode {
        match self {
            Expression::Interpolate { .. } => InterpolationMode::Linear,
            Expression::Case {
                comparison: Comparison::LessOrEqual,
                ..
            } => InterpolationMode::Discrete,
            Expression::Case {
                comparison: Comparison::Equal,
                ..
            } => InterpolationMode::Exact,
        }
    }

    pub fn input(&self) -> &FieldRef {
        match self {
            Expression::Interpolate { input, .. } | Expression::Case { input, .. } => input,
        }
    }

    pub fn no_data(&self) -> Option<&NoData> {
        match self {
            Expression::Interpolate { no_data, .. } | Expression::Case { no_data, .. } => {
                no_data.as_ref()
            }
        }
    }

    /// Number of stops or branches, not counting the no-data guard
    pub fn stop_count(&self) -> usize {
        match self {
            Expression::Interpolate { stops, .. } => stops.len(),
            Expression::Case { branches, .. } => branches.len(),
        }
    }
}
