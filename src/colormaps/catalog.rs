//! The ramp catalog: a read-only registry mapping ramp names to colors.
//!
//! The built-in catalog is initialized once per process and shared by
//! reference. Callers that need extra ramps build their own [`RampCatalog`]
//! and pass it to [`resolve_ramp`](super::resolve_ramp) instead.

use colorgrad::Gradient;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::color::{Color, Rgba};
use super::{categorical, diverging, sequential};
use crate::error::{Result, SymbologyError};

/// Classes recommended when a caller does not ask for a specific count
pub const DEFAULT_CLASSES: usize = 9;

/// Built-in ramps, created on first use
static BUILTIN: Lazy<RampCatalog> = Lazy::new(RampCatalog::with_builtin_ramps);

/// How a ramp is meant to be read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RampKind {
    /// Low to high
    Sequential,
    /// Two hues meeting at a neutral color
    Divergent {
        /// Position of the neutral color in `[0, 1]`
        critical_value: f64,
    },
    /// Wraps around, first and last colors match
    Cyclic,
    /// Distinct hues with no order
    Categorical,
}

/// Where a ramp's colors come from
#[derive(Clone)]
pub enum RampSource {
    /// A fixed, finite list of colors
    Palette(Vec<Color>),
    /// A parametric gradient sampled on demand
    Gradient(fn() -> Gradient),
}

impl fmt::Debug for RampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampSource::Palette(colors) => f.debug_tuple("Palette").field(&colors.len()).finish(),
            RampSource::Gradient(_) => f.write_str("Gradient"),
        }
    }
}

/// A named ramp in the catalog
#[derive(Debug, Clone)]
pub struct RampDefinition {
    /// Lookup name (lowercase)
    pub name: String,
    /// How the ramp is meant to be read
    pub kind: RampKind,
    /// Recommended number of classes
    pub default_classes: usize,
    /// Color source
    pub source: RampSource,
}

impl RampDefinition {
    /// A ramp backed by a fixed list of colors
    pub fn palette(name: &str, kind: RampKind, colors: Vec<Color>) -> Self {
        let default_classes = match kind {
            RampKind::Categorical => colors.len(),
            _ => DEFAULT_CLASSES,
        };
        Self {
            name: name.to_lowercase(),
            kind,
            default_classes,
            source: RampSource::Palette(colors),
        }
    }

    /// A ramp backed by a parametric gradient
    pub fn gradient(name: &str, kind: RampKind, gradient: fn() -> Gradient) -> Self {
        Self {
            name: name.to_lowercase(),
            kind,
            default_classes: DEFAULT_CLASSES,
            source: RampSource::Gradient(gradient),
        }
    }

    /// Number of fixed colors, `None` for gradients
    pub fn palette_len(&self) -> Option<usize> {
        match &self.source {
            RampSource::Palette(colors) => Some(colors.len()),
            RampSource::Gradient(_) => None,
        }
    }

    /// Describe why `classes` is a poor fit for this ramp, if it is one
    pub fn check_classes(&self, classes: usize) -> Option<String> {
        if let RampKind::Divergent { .. } = self.kind {
            if classes < 3 {
                return Some(format!(
                    "{} needs at least 3 classes to show its midpoint (got {})",
                    self.name, classes
                ));
            }
        }
        match self.palette_len() {
            Some(len) if classes > len => Some(format!(
                "{} has only {} colors; {} classes will reuse colors",
                self.name, len, classes
            )),
            _ => None,
        }
    }
}

/// A registry of named ramps
#[derive(Debug, Clone, Default)]
pub struct RampCatalog {
    ramps: BTreeMap<String, RampDefinition>,
}

impl RampCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide catalog of built-in ramps
    pub fn builtin() -> &'static RampCatalog {
        &BUILTIN
    }

    /// A fresh catalog holding every built-in ramp, ready to be extended
    pub fn with_builtin_ramps() -> Self {
        let mut catalog = Self::new();

        for (name, colors) in categorical::PALETTES {
            let colors = colors.iter().map(|hex| Color::from(*hex)).collect();
            catalog.insert(RampDefinition::palette(name, RampKind::Categorical, colors));
        }

        let divergent = RampKind::Divergent {
            critical_value: diverging::CRITICAL_VALUE,
        };
        for (name, rgb) in diverging::PALETTES {
            let colors = rgb
                .iter()
                .map(|&[r, g, b]| Color::Rgba(Rgba::opaque(r, g, b)))
                .collect();
            catalog.insert(RampDefinition::palette(name, divergent, colors));
        }
        for (name, gradient) in diverging::GRADIENTS {
            catalog.insert(RampDefinition::gradient(name, divergent, *gradient));
        }

        for (name, gradient) in sequential::GRADIENTS {
            catalog.insert(RampDefinition::gradient(
                name,
                RampKind::Sequential,
                *gradient,
            ));
        }
        for (name, gradient) in sequential::CYCLIC {
            catalog.insert(RampDefinition::gradient(name, RampKind::Cyclic, *gradient));
        }

        catalog
    }

    /// Add or replace a ramp
    pub fn insert(&mut self, ramp: RampDefinition) {
        self.ramps.insert(ramp.name.clone(), ramp);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_ramp(mut self, ramp: RampDefinition) -> Self {
        self.insert(ramp);
        self
    }

    /// Look up a ramp by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&RampDefinition> {
        self.ramps
            .get(&name.to_lowercase())
            .ok_or_else(|| SymbologyError::UnknownRamp {
                name: name.to_string(),
            })
    }

    /// Whether a ramp exists
    pub fn contains(&self, name: &str) -> bool {
        self.ramps.contains_key(&name.to_lowercase())
    }

    /// Ramp names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ramps.keys().map(String::as_str)
    }

    /// Number of ramps
    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    /// Whether the catalog has no ramps
    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }
}
