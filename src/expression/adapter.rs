//! Conversion between [`Expression`] and the renderer's nested JSON arrays.
//!
//! Reading an expression back is what lets a saved style be edited: the
//! stops are recovered, edited, and emitted again. The array form does not
//! mark the no-data guard, so callers say whether the expression carries
//! one. Serde has no such channel and infers it: a leading stop or `==`
//! branch with a fully transparent color is read as the guard.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use super::{CaseBranch, Comparison, Expression, FieldRef, NoData};
use crate::colormaps::Color;
use crate::error::{Result, SymbologyError};
use crate::scale::ScaleContext;
use crate::stops::{Stop, StopList};

fn invalid(message: impl Into<String>) -> SymbologyError {
    SymbologyError::InvalidExpression {
        message: message.into(),
    }
}

impl FieldRef {
    /// `["band", n]` or `["get", name]`
    pub fn to_value(&self) -> Value {
        match self {
            FieldRef::Band(n) => json!(["band", n]),
            FieldRef::Property(name) => json!(["get", name]),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let parts = value
            .as_array()
            .ok_or_else(|| invalid(format!("field reference must be an array: {}", value)))?;
        match (parts.first().and_then(Value::as_str), parts.get(1)) {
            (Some("band"), Some(n)) if parts.len() == 2 => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(FieldRef::Band)
                .ok_or_else(|| invalid(format!("bad band number: {}", n))),
            (Some("get"), Some(Value::String(name))) if parts.len() == 2 => {
                Ok(FieldRef::Property(name.clone()))
            }
            _ => Err(invalid(format!("unsupported field reference: {}", value))),
        }
    }
}

fn color_to_value(color: &Color) -> Value {
    match color {
        Color::Rgba(c) => json!([c.r, c.g, c.b, c.a]),
        Color::Named(s) => json!(s),
    }
}

fn color_from_value(value: &Value) -> Result<Color> {
    Color::deserialize(value).map_err(|e| invalid(format!("bad color {}: {}", value, e)))
}

fn number(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| invalid(format!("expected a number, got {}", value)))
}

impl Expression {
    /// The nested array form renderers consume
    pub fn to_value(&self) -> Value {
        match self {
            Expression::Interpolate {
                input,
                no_data,
                stops,
            } => {
                let mut out = vec![json!("interpolate"), json!(["linear"]), input.to_value()];
                if let Some(nd) = no_data {
                    out.push(json!(nd.value));
                    out.push(color_to_value(&nd.color));
                }
                for (threshold, color) in stops {
                    out.push(json!(threshold));
                    out.push(color_to_value(color));
                }
                Value::Array(out)
            }
            Expression::Case {
                input,
                no_data,
                comparison,
                branches,
                fallback,
            } => {
                let field = input.to_value();
                let mut out = vec![json!("case")];
                if let Some(nd) = no_data {
                    out.push(json!(["==", field, nd.value]));
                    out.push(color_to_value(&nd.color));
                }
                for branch in branches {
                    out.push(json!([comparison.symbol(), field, branch.threshold]));
                    out.push(color_to_value(&branch.color));
                }
                out.push(color_to_value(fallback));
                Value::Array(out)
            }
        }
    }

    /// Parse the nested array form. With `guarded`, the first stop or
    /// branch is the no-data guard and must be present.
    pub fn from_value(value: &Value, guarded: bool) -> Result<Self> {
        Self::parse(value, Guard::Given(guarded))
    }

    /// Parse the nested array form, reading a leading transparent stop or
    /// `==` branch as the no-data guard
    pub fn from_value_inferred(value: &Value) -> Result<Self> {
        Self::parse(value, Guard::Inferred)
    }

    fn parse(value: &Value, guard: Guard) -> Result<Self> {
        let parts = value
            .as_array()
            .ok_or_else(|| invalid("expression must be an array"))?;
        match parts.first().and_then(Value::as_str) {
            Some("interpolate") => parse_interpolate(parts, guard),
            Some("case") => parse_case(parts, guard),
            Some(tag) => Err(invalid(format!("unsupported expression tag: {}", tag))),
            None => Err(invalid("expression has no tag")),
        }
    }

    /// Recover the stop list, mapping thresholds back into the data range
    /// when `ctx` is given
    pub fn to_stops(&self, ctx: Option<&ScaleContext>) -> StopList {
        let restore = |t: f64| match ctx {
            Some(ctx) => ctx.scale(t),
            None => t,
        };
        match self {
            Expression::Interpolate { stops, .. } => stops
                .iter()
                .map(|(t, c)| Stop::new(restore(*t), c.clone()))
                .collect(),
            Expression::Case { branches, .. } => branches
                .iter()
                .map(|b| Stop::new(restore(b.threshold), b.color.clone()))
                .collect(),
        }
    }
}

/// Read stops back out of a renderer expression, skipping the no-data guard
/// when `guarded`
pub fn stops_from_value(
    value: &Value,
    guarded: bool,
    ctx: Option<&ScaleContext>,
) -> Result<StopList> {
    Ok(Expression::from_value(value, guarded)?.to_stops(ctx))
}

/// Whether the leading stop is the no-data guard
#[derive(Debug, Clone, Copy)]
enum Guard {
    Given(bool),
    Inferred,
}

impl Guard {
    fn applies(self, first: Option<(&Color, Comparison)>) -> Result<bool> {
        match (self, first) {
            (Guard::Given(false), _) => Ok(false),
            (Guard::Given(true), Some((_, Comparison::Equal))) => Ok(true),
            (Guard::Given(true), Some((_, Comparison::LessOrEqual))) => {
                Err(invalid("no-data guard must be an == branch"))
            }
            (Guard::Given(true), None) => Err(invalid("expression has no no-data guard")),
            (Guard::Inferred, Some((color, Comparison::Equal))) => Ok(color.is_transparent()),
            (Guard::Inferred, _) => Ok(false),
        }
    }
}

fn parse_interpolate(parts: &[Value], guard: Guard) -> Result<Expression> {
    if parts.len() < 3 {
        return Err(invalid("interpolate needs a type and an input"));
    }
    match parts[1].as_array().and_then(|t| t.first()).and_then(Value::as_str) {
        Some("linear") => {}
        _ => return Err(invalid(format!("unsupported interpolation: {}", parts[1]))),
    }
    let input = FieldRef::from_value(&parts[2])?;

    let rest = &parts[3..];
    if rest.len() % 2 != 0 {
        return Err(invalid("interpolate stops must come in pairs"));
    }
    let mut stops = rest
        .chunks(2)
        .map(|pair| -> Result<(f64, Color)> {
            Ok((number(&pair[0])?, color_from_value(&pair[1])?))
        })
        .collect::<Result<Vec<_>>>()?;

    // Interpolate stops carry no operator; the guard matches its value
    let first = stops.first().map(|(_, color)| (color, Comparison::Equal));
    let no_data = if guard.applies(first)? {
        let (value, color) = stops.remove(0);
        Some(NoData { value, color })
    } else {
        None
    };

    Ok(Expression::Interpolate {
        input,
        no_data,
        stops,
    })
}

fn parse_case(parts: &[Value], guard: Guard) -> Result<Expression> {
    // Tag, condition/output pairs, fallback
    if parts.len() < 2 || parts.len() % 2 != 0 {
        return Err(invalid("case needs condition/output pairs and a fallback"));
    }
    let fallback = color_from_value(&parts[parts.len() - 1])?;

    let mut input: Option<FieldRef> = None;
    let mut conditions = Vec::with_capacity((parts.len() - 2) / 2);
    for pair in parts[1..parts.len() - 1].chunks(2) {
        let condition = pair[0]
            .as_array()
            .filter(|c| c.len() == 3)
            .ok_or_else(|| invalid(format!("bad case condition: {}", pair[0])))?;
        let comparison = match condition[0].as_str() {
            Some("<=") => Comparison::LessOrEqual,
            Some("==") => Comparison::Equal,
            _ => return Err(invalid(format!("unsupported operator: {}", condition[0]))),
        };
        let field = FieldRef::from_value(&condition[1])?;
        match &input {
            Some(existing) if *existing != field => {
                return Err(invalid("case conditions read different fields"));
            }
            Some(_) => {}
            None => input = Some(field),
        }
        conditions.push((comparison, number(&condition[2])?, color_from_value(&pair[1])?));
    }

    let input = input.ok_or_else(|| invalid("case has no conditions"))?;
    let first = conditions.first().map(|(comparison, _, color)| (color, *comparison));
    let no_data = if guard.applies(first)? {
        let (_, value, color) = conditions.remove(0);
        Some(NoData { value, color })
    } else {
        None
    };

    // With nothing past the guard there is no operator to read; exact is assumed
    let comparison = conditions
        .first()
        .map_or(Comparison::Equal, |(comparison, _, _)| *comparison);
    if conditions.iter().any(|(c, _, _)| *c != comparison) {
        return Err(invalid("case branches mix <= and =="));
    }
    let branches = conditions
        .into_iter()
        .map(|(_, threshold, color)| CaseBranch { threshold, color })
        .collect();

    Ok(Expression::Case {
        input,
        no_data,
        comparison,
        branches,
        fallback,
    })
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Expression::from_value_inferred(&value).map_err(serde::de::Error::custom)
    }
}
