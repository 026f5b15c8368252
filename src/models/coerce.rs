use serde::Deserialize;
use serde_json::Value;

/// Parses a JSON value as a finite number. Sensor feeds deliver numeric
/// fields either as JSON numbers or as quoted strings depending on the
/// aggregation endpoint, so both are accepted.
pub fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Like [`to_f64`] but defaults to `0.0` for anything unparsable.
///
/// The zero default keeps malformed feed entries chartable instead of
/// failing the whole series; callers that need to distinguish absence
/// should use [`to_f64`] directly.
pub fn lossy_f64(value: &Value) -> f64 {
    to_f64(value).unwrap_or(0.0)
}

/// Serde field helper accepting a number or a numeric string.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lossy_f64(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_string_parses() {
        assert_eq!(to_f64(&json!("23.5")), Some(23.5));
        assert_eq!(lossy_f64(&json!("23.5")), 23.5);
    }

    #[test]
    fn test_non_numeric_string_defaults() {
        assert_eq!(to_f64(&json!("N/A")), None);
        assert_eq!(lossy_f64(&json!("N/A")), 0.0);
    }

    #[test]
    fn test_plain_numbers_pass_through() {
        assert_eq!(to_f64(&json!(42)), Some(42.0));
        assert_eq!(to_f64(&json!(-3.25)), Some(-3.25));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(to_f64(&json!("  7.5 ")), Some(7.5));
    }

    #[test]
    fn test_non_scalar_values_default() {
        assert_eq!(to_f64(&Value::Null), None);
        assert_eq!(to_f64(&json!(true)), None);
        assert_eq!(to_f64(&json!([1, 2])), None);
        assert_eq!(lossy_f64(&json!({"value": 1})), 0.0);
    }
}
