//! Color ramps for classified layers.
//!
//! This module resolves named ramps into discrete color sequences, either by
//! slicing a fixed palette or by sampling a parametric gradient.

pub mod catalog;
pub mod categorical;
pub mod color;
pub mod diverging;
pub mod ramp;
pub mod sequential;

pub use catalog::{RampCatalog, RampDefinition, RampKind, RampSource, DEFAULT_CLASSES};
pub use color::{Color, Rgba};
pub use ramp::{resolve_ramp, ColorFormat, RampMode, RampSpec};
