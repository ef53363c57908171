//! Resolving a ramp request into a concrete list of colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{trace, warn};

use super::catalog::{RampCatalog, RampSource};
use super::color::{Color, Rgba};
use crate::error::{Result, SymbologyError};

/// Output format of resolved colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb` strings
    #[default]
    Hex,
    /// `[r, g, b, a]` channels
    Rgba,
}

/// How shades are picked from a fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampMode {
    /// Resample evenly across the whole palette
    #[default]
    Graduated,
    /// Take the leading colors verbatim, one per category
    Categorized,
}

impl fmt::Display for RampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampMode::Graduated => f.write_str("graduated"),
            RampMode::Categorized => f.write_str("categorized"),
        }
    }
}

impl FromStr for RampMode {
    type Err = SymbologyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graduated" => Ok(RampMode::Graduated),
            "categorized" => Ok(RampMode::Categorized),
            _ => Err(SymbologyError::InvalidParameter {
                param: "mode".to_string(),
                message: format!("Unknown ramp mode: {}", s),
            }),
        }
    }
}

fn default_alpha() -> f64 {
    1.0
}

/// A request for `shade_count` colors from a named ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampSpec {
    /// Catalog name
    pub name: String,
    /// Number of colors wanted
    pub shade_count: usize,
    /// Output format
    #[serde(default)]
    pub format: ColorFormat,
    /// Palette sampling mode
    #[serde(default)]
    pub mode: RampMode,
    /// Reverse the ramp after sampling
    #[serde(default)]
    pub reverse: bool,
    /// Alpha applied to every color
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl RampSpec {
    /// Graduated, opaque hex colors
    pub fn new(name: impl Into<String>, shade_count: usize) -> Self {
        Self {
            name: name.into(),
            shade_count,
            format: ColorFormat::default(),
            mode: RampMode::default(),
            reverse: false,
            alpha: default_alpha(),
        }
    }

    /// Set the output format
    pub fn format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the palette sampling mode
    pub fn mode(mut self, mode: RampMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reverse the ramp
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the alpha of every color
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Resolve `spec` against `catalog` into exactly `spec.shade_count` colors.
///
/// Fixed palettes are sliced (categorized) or resampled by nearest index
/// (graduated); gradients are sampled at evenly spaced positions.
pub fn resolve_ramp(catalog: &RampCatalog, spec: &RampSpec) -> Result<Vec<Color>> {
    let count = spec.shade_count;
    if count < 1 {
        return Err(SymbologyError::InvalidClassCount { requested: count });
    }
    if !spec.alpha.is_finite() || !(0.0..=1.0).contains(&spec.alpha) {
        return Err(SymbologyError::InvalidParameter {
            param: "alpha".to_string(),
            message: format!("alpha must be within 0..=1, got {}", spec.alpha),
        });
    }

    let ramp = catalog.get(&spec.name)?;
    if let Some(message) = ramp.check_classes(count) {
        warn!(ramp = %ramp.name, classes = count, "{}", message);
    }

    let mut colors = match &ramp.source {
        RampSource::Palette(palette) => sample_palette(palette, count, spec.mode)?,
        RampSource::Gradient(gradient) => sample_gradient(*gradient, count),
    };

    if spec.reverse {
        colors.reverse();
    }

    trace!(
        ramp = %ramp.name,
        shades = count,
        mode = %spec.mode,
        reverse = spec.reverse,
        "Resolved color ramp"
    );

    Ok(colors
        .into_iter()
        .map(|c| {
            let c = c.with_alpha(spec.alpha);
            match spec.format {
                ColorFormat::Hex => Color::Named(c.to_hex()),
                ColorFormat::Rgba => Color::Rgba(c),
            }
        })
        .collect())
}

/// Pick `count` colors from a fixed palette
fn sample_palette(palette: &[Color], count: usize, mode: RampMode) -> Result<Vec<Rgba>> {
    let len = palette.len();
    if len == 0 {
        return Err(SymbologyError::InvalidParameter {
            param: "ramp".to_string(),
            message: "palette has no colors".to_string(),
        });
    }

    let indices: Vec<usize> = if count <= 1 {
        vec![0]
    } else {
        match mode {
            // Wrap around once the palette runs out
            RampMode::Categorized => (0..count).map(|i| i % len).collect(),
            RampMode::Graduated => {
                let step = (len - 1) as f64 / (count - 1) as f64;
                (0..count)
                    .map(|i| ((i as f64 * step).round() as usize).min(len - 1))
                    .collect()
            }
        }
    };

    indices.into_iter().map(|i| palette[i].to_rgba()).collect()
}

/// Sample `count` evenly spaced colors from a gradient
fn sample_gradient(gradient: fn() -> colorgrad::Gradient, count: usize) -> Vec<Rgba> {
    let gradient = gradient();
    let (dmin, dmax) = gradient.domain();

    (0..count)
        .map(|i| {
            let t = if count == 1 {
                dmin
            } else {
                dmin + (dmax - dmin) * i as f64 / (count - 1) as f64
            };
            let [r, g, b, _] = gradient.at(t).to_rgba8();
            Rgba::opaque(r, g, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::categorical::TABLEAU10;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex().unwrap()).collect()
    }

    #[test]
    fn test_categorized_truncates() {
        let spec = RampSpec::new("tableau10", 3).mode(RampMode::Categorized);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert_eq!(hexes(&colors), vec![TABLEAU10[0], TABLEAU10[1], TABLEAU10[2]]);
    }

    #[test]
    fn test_graduated_resamples() {
        // step = 9 / 2 = 4.5, indices round(0), round(4.5), round(9)
        let spec = RampSpec::new("tableau10", 3);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert_eq!(hexes(&colors), vec![TABLEAU10[0], TABLEAU10[5], TABLEAU10[9]]);
    }

    #[test]
    fn test_graduated_four_shades() {
        // step = 3, indices 0, 3, 6, 9
        let spec = RampSpec::new("tableau10", 4);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert_eq!(
            hexes(&colors),
            vec![TABLEAU10[0], TABLEAU10[3], TABLEAU10[6], TABLEAU10[9]]
        );
    }

    #[test]
    fn test_single_shade_is_first_color() {
        for mode in [RampMode::Graduated, RampMode::Categorized] {
            let spec = RampSpec::new("tableau10", 1).mode(mode);
            let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
            assert_eq!(hexes(&colors), vec![TABLEAU10[0]]);
        }
    }

    #[test]
    fn test_categorized_wraps() {
        let spec = RampSpec::new("set2", 10).mode(RampMode::Categorized);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[8], colors[0]);
        assert_eq!(colors[9], colors[1]);
    }

    #[test]
    fn test_gradient_length_and_format() {
        let spec = RampSpec::new("viridis", 9).format(ColorFormat::Rgba);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert_eq!(colors.len(), 9);
        assert!(colors.iter().all(|c| matches!(c, Color::Rgba(rgba) if rgba.a == 1.0)));

        let spec = RampSpec::new("viridis", 9);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert!(colors
            .iter()
            .all(|c| matches!(c, Color::Named(s) if s.len() == 7 && s.starts_with('#'))));
    }

    #[test]
    fn test_reverse() {
        let forward = resolve_ramp(RampCatalog::builtin(), &RampSpec::new("magma", 5)).unwrap();
        let mut backward = resolve_ramp(
            RampCatalog::builtin(),
            &RampSpec::new("magma", 5).reversed(true),
        )
        .unwrap();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_alpha() {
        let spec = RampSpec::new("set1", 2)
            .format(ColorFormat::Rgba)
            .alpha(0.5);
        let colors = resolve_ramp(RampCatalog::builtin(), &spec).unwrap();
        assert!(colors
            .iter()
            .all(|c| matches!(c, Color::Rgba(rgba) if rgba.a == 0.5)));

        let spec = RampSpec::new("set1", 2).alpha(1.5);
        assert!(resolve_ramp(RampCatalog::builtin(), &spec).is_err());
    }

    #[test]
    fn test_errors() {
        let catalog = RampCatalog::builtin();
        assert!(matches!(
            resolve_ramp(catalog, &RampSpec::new("nope", 3)),
            Err(SymbologyError::UnknownRamp { .. })
        ));
        assert!(matches!(
            resolve_ramp(catalog, &RampSpec::new("viridis", 0)),
            Err(SymbologyError::InvalidClassCount { .. })
        ));
    }

    #[test]
    fn test_spec_deserialize_defaults() {
        let spec: RampSpec =
            serde_json::from_str(r#"{"name": "viridis", "shade_count": 5}"#).unwrap();
        assert_eq!(spec, RampSpec::new("viridis", 5));
    }
}
