//! JSON helpers for the GeoJSON side of the converter.

use geojson::Geometry;
use serde_json::{Number, Value};

use crate::error::{Error, Result};
use crate::types::{Format, JsonStyle};

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse raw text as JSON, reporting failures as GeoJSON syntax errors.
pub fn parse_json(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| Error::syntax(Format::GeoJson, e.to_string()))
}

/// Encode a JSON value in the requested style, without a trailing newline.
pub fn encode_json(value: &Value, style: JsonStyle) -> Result<String> {
    let text = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
        JsonStyle::Compact => serde_json::to_string(value)?,
    };
    Ok(text)
}

/// Convert a GeoJSON geometry into a JSON value with integral ordinates
/// written as integers.
pub fn geometry_to_json(geometry: &Geometry) -> Result<Value> {
    let mut value = serde_json::to_value(geometry)?;
    integralize(&mut value);
    Ok(value)
}

/// Rewrite floats with no fractional part as integers, so `1.0` prints as `1`.
pub(crate) fn integralize(value: &mut Value) {
    match value {
        Value::Number(number) => {
            if let Some(integer) = as_exact_integer(number) {
                *number = Number::from(integer);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integralize),
        Value::Object(map) => map.values_mut().for_each(integralize),
        _ => {}
    }
}

fn as_exact_integer(number: &Number) -> Option<i64> {
    if number.is_i64() || number.is_u64() {
        return None;
    }
    let float = number.as_f64()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        Some(float as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_error_names_geojson() {
        let err = parse_json("{\"type\":").unwrap_err();
        assert!(err.to_string().starts_with("Invalid GeoJSON: "));
    }

    #[test]
    fn test_encode_pretty_uses_two_spaces() {
        let value = json!({"type": "Point", "coordinates": [1, 2]});
        let text = encode_json(&value, JsonStyle::Pretty).unwrap();
        assert_eq!(
            text,
            "{\n  \"type\": \"Point\",\n  \"coordinates\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[test]
    fn test_encode_keeps_key_order() {
        let value = parse_json(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
        assert_eq!(
            encode_json(&value, JsonStyle::Compact).unwrap(),
            r#"{"type":"Point","coordinates":[1,2]}"#
        );
    }

    #[test]
    fn test_geometry_to_json_writes_integers() {
        let geometry = Geometry::new(geojson::Value::Point(vec![1.0, 2.5]));
        let value = geometry_to_json(&geometry).unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [1, 2.5]}));
    }
}
