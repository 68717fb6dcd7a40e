//! Output templates for the analyzer bindings.
//!
//! Values are displayed the way the page's template literals would show them,
//! so a payload renders identically whichever host drives the bridge.

use serde_json::Value;

use crate::outcome::{BridgeError, Payload};

/// Display a JSON value as template-literal interpolation would.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // 1.0 interpolates as "1"
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Largest basis-point magnitude an `f64` still holds exactly.
const MAX_BASIS_POINTS: f64 = 9_007_199_254_740_992.0;

/// Format a fraction in [0, 1] as a percentage with two decimals.
///
/// Rounds half away from zero on the basis-point value, so 0.12345 gives
/// "12.35%" and 0.8734 gives "87.34%".
pub fn format_percentage(fraction: f64) -> Result<String, BridgeError> {
    if !fraction.is_finite() {
        return Err(BridgeError::Payload(format!(
            "score {fraction} is not a finite number"
        )));
    }
    let basis_points = (fraction * 10_000.0).round();
    if basis_points.abs() > MAX_BASIS_POINTS {
        return Err(BridgeError::Payload(format!(
            "score {fraction} is out of range"
        )));
    }
    let basis_points = basis_points as i64;
    let sign = if basis_points < 0 { "-" } else { "" };
    let magnitude = basis_points.unsigned_abs();
    Ok(format!("{}{}.{:02}%", sign, magnitude / 100, magnitude % 100))
}

/// A top-level field, or `undefined` when the payload lacks it.
fn field_text(payload: &Payload, name: &str) -> String {
    payload
        .get(name)
        .map(display_value)
        .unwrap_or_else(|| "undefined".to_string())
}

/// The field itself, with nothing around it.
pub fn plain(payload: &Payload, name: &str) -> String {
    field_text(payload, name)
}

/// `"{label}: {field}"`, e.g. "Summary: ...".
pub fn labelled(payload: &Payload, label: &str, name: &str) -> String {
    format!("{}: {}", label, field_text(payload, name))
}

/// `"Sentiment: {label} ({score as percentage})"`.
///
/// The `sentiment` field must be an object; an absent `label` shows as
/// `undefined`.
pub fn sentiment(payload: &Payload) -> Result<String, BridgeError> {
    let sentiment = match payload.get("sentiment") {
        None | Some(Value::Null) => {
            return Err(BridgeError::MissingField("sentiment".to_string()))
        }
        Some(Value::Object(sentiment)) => sentiment,
        Some(other) => {
            return Err(BridgeError::Payload(format!(
                "sentiment {other} is not an object"
            )))
        }
    };
    let label = field_text(sentiment, "label");
    let score = sentiment
        .get("score")
        .ok_or_else(|| BridgeError::MissingField("sentiment.score".to_string()))?;
    let score = score
        .as_f64()
        .ok_or_else(|| BridgeError::Payload(format!("sentiment.score {score} is not a number")))?;

    Ok(format!("Sentiment: {} ({})", label, format_percentage(score)?))
}
