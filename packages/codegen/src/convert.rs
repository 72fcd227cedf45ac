//! Conversion from Value to serde_json.

use metagen_core_store::Value;

/// Largest integer a JavaScript number holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert our Value to serde_json::Value.
///
/// Numbers follow what a browser's `JSON.stringify` sees: integral floats
/// lose their fractional part, non-finite floats become `null`, and integers
/// past 2^53 are rounded to the nearest double.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) if i.unsigned_abs() > MAX_SAFE_INTEGER as u64 => {
            float_to_json(*i as f64)
        }
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => float_to_json(*f),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

fn float_to_json(f: f64) -> serde_json::Value {
    if !f.is_finite() {
        return serde_json::Value::Null;
    }
    if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
        return serde_json::Value::Number((f as i64).into());
    }
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_order_is_preserved() {
        let value = Value::from_entries([
            ("zeta", Value::from(1i64)),
            ("alpha", Value::from(2i64)),
            ("mid", Value::from(3i64)),
        ]);
        let json = value_to_json(&value);
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn integral_floats_print_like_integers() {
        assert_eq!(value_to_json(&Value::Float(3.0)).to_string(), "3");
        assert_eq!(value_to_json(&Value::Float(-0.0)).to_string(), "0");
        assert_eq!(value_to_json(&Value::Float(1.5)).to_string(), "1.5");
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(value_to_json(&Value::Float(f64::NAN)), serde_json::Value::Null);
        assert_eq!(value_to_json(&Value::Float(f64::INFINITY)), serde_json::Value::Null);
    }

    #[test]
    fn integers_past_two_to_the_53_round_like_doubles() {
        let json = value_to_json(&Value::Integer(9_007_199_254_740_993));
        assert_eq!(json.as_f64(), Some(9_007_199_254_740_992.0));
        assert!(json.is_f64());

        let json = value_to_json(&Value::Integer(9_007_199_254_740_992));
        assert_eq!(json.as_i64(), Some(9_007_199_254_740_992));
    }

    #[test]
    fn nested_conversion() {
        let value = Value::from_entries([
            (
                "openGraph",
                Value::from_entries([(
                    "images",
                    Value::Array(vec![Value::from_entries([("url", Value::from(""))])]),
                )]),
            ),
            ("robots", Value::from_entries([("index", Value::from(true))])),
        ]);
        assert_eq!(
            value_to_json(&value),
            json!({
                "openGraph": { "images": [{ "url": "" }] },
                "robots": { "index": true }
            })
        );
    }
}
