//! Building expressions from stop lists.

use tracing::trace;

use super::{CaseBranch, Comparison, Expression, FieldRef, InterpolationMode, NoData};
use crate::colormaps::Color;
use crate::error::{ensure_finite, Result};
use crate::scale::ScaleContext;
use crate::stops::StopList;

/// Configurable builder for [`Expression`]s.
///
/// Holds no state between builds: the same builder can emit expressions
/// for any number of stop lists, and switching the mode on an existing
/// stop list only changes the emitted shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionBuilder {
    input: FieldRef,
    mode: InterpolationMode,
    no_data: Option<NoData>,
    scale: Option<ScaleContext>,
}

impl ExpressionBuilder {
    /// Linear mode with a transparent no-data guard at `0`
    pub fn new(input: FieldRef) -> Self {
        Self {
            input,
            mode: InterpolationMode::default(),
            no_data: Some(NoData::default()),
            scale: None,
        }
    }

    pub fn mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn no_data(mut self, no_data: NoData) -> Self {
        self.no_data = Some(no_data);
        self
    }

    /// Emit no guard at all, e.g. for vector properties
    pub fn without_no_data(mut self) -> Self {
        self.no_data = None;
        self
    }

    /// Map stop thresholds from the given data range into `[0, 1]`
    pub fn scale(mut self, ctx: ScaleContext) -> Self {
        self.scale = Some(ctx);
        self
    }

    /// Emit the expression for `stops`.
    ///
    /// Stops are sorted by threshold first. In exact mode a repeated
    /// threshold keeps only its last stop.
    pub fn build(&self, stops: &StopList) -> Result<Expression> {
        ensure_finite(&stops.thresholds(), "stop thresholds")?;
        if let Some(no_data) = &self.no_data {
            ensure_finite(&[no_data.value], "no-data value")?;
        }

        let sorted = stops.clone().sort_by_threshold();
        let mut pairs = Vec::with_capacity(sorted.len());
        for stop in sorted {
            let threshold = match &self.scale {
                Some(ctx) => ctx.unscale(stop.threshold)?,
                None => stop.threshold,
            };
            pairs.push((threshold, stop.color));
        }

        let expression = match self.mode {
            InterpolationMode::Linear => Expression::Interpolate {
                input: self.input.clone(),
                no_data: self.no_data.clone(),
                stops: pairs,
            },
            InterpolationMode::Discrete => self.case(Comparison::LessOrEqual, pairs),
            InterpolationMode::Exact => self.case(Comparison::Equal, dedup_last(pairs)),
        };

        trace!(
            input = %self.input,
            mode = %self.mode,
            stops = expression.stop_count(),
            guarded = self.no_data.is_some(),
            "Built style expression"
        );

        Ok(expression)
    }

    fn case(&self, comparison: Comparison, pairs: Vec<(f64, Color)>) -> Expression {
        Expression::Case {
            input: self.input.clone(),
            no_data: self.no_data.clone(),
            comparison,
            branches: pairs
                .into_iter()
                .map(|(threshold, color)| CaseBranch { threshold, color })
                .collect(),
            fallback: Color::transparent(),
        }
    }
}

/// Build an expression with a transparent guard for `no_data`, if any
pub fn build_expression(
    stops: &StopList,
    mode: InterpolationMode,
    input: FieldRef,
    no_data: Option<NoData>,
) -> Result<Expression> {
    let builder = ExpressionBuilder::new(input).mode(mode);
    let builder = match no_data {
        Some(no_data) => builder.no_data(no_data),
        None => builder.without_no_data(),
    };
    builder.build(stops)
}

/// Collapse runs of equal thresholds into their last entry
fn dedup_last(pairs: Vec<(f64, Color)>) -> Vec<(f64, Color)> {
    let mut out: Vec<(f64, Color)> = Vec::with_capacity(pairs.len());
    for (threshold, color) in pairs {
        match out.last_mut() {
            Some(last) if last.0 == threshold => last.1 = color,
            _ => out.push((threshold, color)),
        }
    }
    out
}
