//! Lenient numeric decoding.
//!
//! Weather values arrive as JSON numbers, numeric strings or `null`. Anything
//! that does not parse to a finite `f64` is treated as missing, so NaN and
//! Infinity never reach alignment or charting code.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a string as a finite float, trimming surrounding whitespace.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keep a float only if it is finite.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Coerce an arbitrary JSON value into a finite float.
pub fn coerce_finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => finite(n.as_f64()),
        Value::String(s) => parse_finite(s),
        _ => None,
    }
}

/// Serde `deserialize_with` adapter for optional finite floats.
pub fn finite_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_finite))
}
