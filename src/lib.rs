//! # symbology
//!
//! Classification and color-mapping engine for map layer styles.
//!
//! This library turns a sample of numeric values (vector attributes or
//! raster band pixels) into a styled, classified color ramp that a renderer
//! can consume.
//!
//! ## Key Features
//!
//! - **Five classification methods**: quantile, equal interval, natural breaks (Jenks), pretty and logarithmic
//! - **Color ramps**: fixed categorical and diverging palettes plus parametric gradients
//! - **Editable stop lists**: insert, remove and re-sort stops while authoring
//! - **Renderer expressions**: linear, discrete and exact expressions, and parsing them back
//!
//! ## Architecture
//!
//! - **Breaks**: sample → ascending class breaks
//! - **Ramps**: named ramp → one color per class
//! - **Stops**: breaks zipped with colors
//! - **Expressions**: stops → `interpolate` or `case` expression, optionally normalized
//!   against a data range
//!
//! ## Example
//!
//! ```
//! use symbology::{classify, ClassifyOptions};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let result = classify(&sample, &ClassifyOptions::property("population").classes(4))?;
//! assert_eq!(result.breaks, vec![3.25, 5.5, 7.75, 10.0]);
//! # Ok::<(), symbology::SymbologyError>(())
//! ```

pub mod breaks;
pub mod classify;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod expression;
pub mod logging;
pub mod sample_loader;
pub mod scale;
pub mod stops;

pub use breaks::{compute_breaks, get_classifier, unique_values, ClassificationMethod, Classifier};
pub use classify::{
    classify, classify_band, classify_categorized, Classification, ClassifyOptions,
};
pub use colormaps::{resolve_ramp, Color, ColorFormat, RampCatalog, RampMode, RampSpec, Rgba};
pub use config::Config;
pub use error::{Result, SymbologyError};
pub use expression::{Expression, ExpressionBuilder, FieldRef, InterpolationMode, NoData};
pub use logging::{
    generate_request_id, init_tracing, log_classification_stats, log_error, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use sample_loader::{load_sample, parse_sample};
pub use scale::{scale, unscale, ScaleContext};
pub use stops::{Stop, StopList};
