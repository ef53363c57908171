//! End-to-end classification: sample → breaks → colors → stops → expression.
//!
//! Each pipeline takes everything it needs as arguments and returns a new
//! [`Classification`]. Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breaks::raster::{band_quantile_breaks, band_range_breaks};
use crate::breaks::{compute_breaks, unique_values, ClassificationMethod};
use crate::colormaps::{resolve_ramp, RampCatalog, RampMode, RampSpec};
use crate::error::Result;
use crate::expression::{Expression, ExpressionBuilder, FieldRef, InterpolationMode, NoData};
use crate::logging::log_timed_operation;
use crate::scale::ScaleContext;
use crate::stops::StopList;

/// Result of a classification request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Class breaks in data units
    pub breaks: Vec<f64>,
    /// Breaks paired with ramp colors, ascending
    pub stops: StopList,
    /// Renderer expression built from the stops
    pub expression: Expression,
}

/// Parameters shared by all pipelines
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyOptions {
    pub method: ClassificationMethod,
    pub classes: usize,
    pub ramp: String,
    pub reverse: bool,
    pub mode: InterpolationMode,
    pub input: FieldRef,
    /// Guard emitted ahead of the stops; for bands it also excludes pixels
    pub no_data: Option<NoData>,
    /// Data range stop thresholds are normalized against
    pub scale: Option<ScaleContext>,
    /// Round thresholds to this many decimals
    pub precision: Option<u32>,
}

impl ClassifyOptions {
    /// Vector property defaults: five quantile classes on viridis, no guard
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            method: ClassificationMethod::Quantile,
            classes: 5,
            ramp: "viridis".to_string(),
            reverse: false,
            mode: InterpolationMode::Linear,
            input: FieldRef::Property(name.into()),
            no_data: None,
            scale: None,
            precision: None,
        }
    }

    /// Raster band defaults: like [`property`](Self::property) plus a
    /// transparent guard at `0`
    pub fn band(band: u32) -> Self {
        Self {
            input: FieldRef::Band(band),
            no_data: Some(NoData::default()),
            ..Self::property("")
        }
    }

    pub fn method(mut self, method: ClassificationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    pub fn ramp(mut self, ramp: impl Into<String>) -> Self {
        self.ramp = ramp.into();
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn no_data(mut self, no_data: Option<NoData>) -> Self {
        self.no_data = no_data;
        self
    }

    pub fn scale(mut self, scale: Option<ScaleContext>) -> Self {
        self.scale = scale;
        self
    }

    pub fn precision(mut self, precision: Option<u32>) -> Self {
        self.precision = precision;
        self
    }

    fn expression_builder(&self, mode: InterpolationMode) -> ExpressionBuilder {
        let builder = ExpressionBuilder::new(self.input.clone()).mode(mode);
        let builder = match &self.no_data {
            Some(no_data) => builder.no_data(no_data.clone()),
            None => builder.without_no_data(),
        };
        match self.scale {
            Some(ctx) => builder.scale(ctx),
            None => builder,
        }
    }
}

/// Classify a numeric sample into graduated classes using the built-in ramps
pub fn classify(sample: &[f64], options: &ClassifyOptions) -> Result<Classification> {
    classify_with(RampCatalog::builtin(), sample, options)
}

/// [`classify`] against a caller-supplied ramp catalog
pub fn classify_with(
    catalog: &RampCatalog,
    sample: &[f64],
    options: &ClassifyOptions,
) -> Result<Classification> {
    log_timed_operation("classify_graduated", || {
        let breaks = compute_breaks(sample, options.classes, options.method)?;
        finish(catalog, breaks, RampMode::Graduated, options.mode, options)
    })
}

/// One class per distinct value, colored from a categorized ramp.
///
/// Always emits an exact-match expression; `method`, `classes` and `mode`
/// are ignored.
pub fn classify_categorized(sample: &[f64], options: &ClassifyOptions) -> Result<Classification> {
    classify_categorized_with(RampCatalog::builtin(), sample, options)
}

/// [`classify_categorized`] against a caller-supplied ramp catalog
pub fn classify_categorized_with(
    catalog: &RampCatalog,
    sample: &[f64],
    options: &ClassifyOptions,
) -> Result<Classification> {
    log_timed_operation("classify_categorized", || {
        let values = unique_values(sample)?;
        finish(
            catalog,
            values,
            RampMode::Categorized,
            InterpolationMode::Exact,
            options,
        )
    })
}

/// Classify raster band pixels.
///
/// Pixels equal to the no-data value are left out. Quantile and equal
/// interval use band binning, whose stop count follows the interpolation
/// mode; the other methods classify the remaining pixels directly.
pub fn classify_band(values: &[f64], options: &ClassifyOptions) -> Result<Classification> {
    classify_band_with(RampCatalog::builtin(), values, options)
}

/// [`classify_band`] against a caller-supplied ramp catalog
pub fn classify_band_with(
    catalog: &RampCatalog,
    values: &[f64],
    options: &ClassifyOptions,
) -> Result<Classification> {
    log_timed_operation("classify_band", || {
        let no_data = options.no_data.as_ref().map(|nd| nd.value);
        let breaks = match options.method {
            ClassificationMethod::Quantile => {
                band_quantile_breaks(values, options.classes, options.mode, no_data)?
            }
            ClassificationMethod::EqualInterval => {
                band_range_breaks(values, options.classes, options.mode, no_data)?
            }
            method => {
                let valid: Vec<f64> = match no_data {
                    Some(nd) => values.iter().copied().filter(|&v| v != nd).collect(),
                    None => values.to_vec(),
                };
                compute_breaks(&valid, options.classes, method)?
            }
        };
        finish(catalog, breaks, RampMode::Graduated, options.mode, options)
    })
}

/// Pair breaks with ramp colors and build the expression
fn finish(
    catalog: &RampCatalog,
    breaks: Vec<f64>,
    ramp_mode: RampMode,
    mode: InterpolationMode,
    options: &ClassifyOptions,
) -> Result<Classification> {
    let spec = RampSpec::new(options.ramp.clone(), breaks.len())
        .mode(ramp_mode)
        .reversed(options.reverse);
    let colors = resolve_ramp(catalog, &spec)?;

    let stops = StopList::build(&breaks, &colors)?;
    let stops = match options.precision {
        Some(decimals) => stops.round_thresholds(decimals),
        None => stops,
    }
    .sort_by_threshold();

    let expression = options.expression_builder(mode).build(&stops)?;

    debug!(
        ramp = %options.ramp,
        input = %options.input,
        mode = %mode,
        stops = stops.len(),
        "Classification finished"
    );

    Ok(Classification {
        breaks,
        stops,
        expression,
    })
}
