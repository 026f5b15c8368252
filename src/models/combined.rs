use serde_json::Value;

use super::coerce;

/// Field used to align the daily aggregate feeds.
pub const DAILY_JOIN_KEY: &str = "date";

/// One point of a dual-axis chart, built from two aligned series.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    pub key: String,
    pub primary: f64,
    pub secondary: f64,
}

/// Left-outer joins two series of JSON records on `join_key`.
///
/// Produces exactly one record per `primary` entry, in `primary` order. For
/// each primary record the first `secondary` record with an equal join-key
/// value contributes `secondary_field`; primary entries without a match get
/// `0.0`, and secondary entries without a match are dropped. Values go
/// through permissive numeric coercion, so a malformed field also lands at
/// `0.0` rather than failing the chart.
pub fn join_series(
    primary: &[Value],
    secondary: &[Value],
    join_key: &str,
    primary_field: &str,
    secondary_field: &str,
) -> Vec<CombinedRecord> {
    primary
        .iter()
        .map(|record| {
            let key = record.get(join_key).unwrap_or(&Value::Null);
            let matched = secondary
                .iter()
                .find(|candidate| candidate.get(join_key).unwrap_or(&Value::Null) == key);

            CombinedRecord {
                key: key_label(key),
                primary: coerce::lossy_f64(record.get(primary_field).unwrap_or(&Value::Null)),
                secondary: matched
                    .map_or(0.0, |m| {
                        coerce::lossy_f64(m.get(secondary_field).unwrap_or(&Value::Null))
                    }),
            }
        })
        .collect()
}

/// Renders a join-key value as an axis label.
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_join_keys_compare_exactly() {
        let primary = vec![json!({"date": 101, "average_temp": 20.0})];
        let secondary = vec![json!({"date": "101", "motion_count": 5})];

        // A numeric key never matches its quoted form
        let result = join_series(&primary, &secondary, "date", "average_temp", "motion_count");
        assert_eq!(result[0].secondary, 0.0);
        assert_eq!(result[0].key, "101");
    }

    #[test]
    fn test_records_missing_the_key_still_produce_output() {
        let primary = vec![json!({"average_temp": 19.5})];
        let secondary = vec![json!({"date": "01-01", "motion_count": 3})];

        let result = join_series(&primary, &secondary, "date", "average_temp", "motion_count");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "");
        assert_eq!(result[0].primary, 19.5);
        assert_eq!(result[0].secondary, 0.0);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let primary = vec![json!({"date": "01-01", "average_temp": "20.0"})];
        let secondary = vec![json!({"date": "01-01", "motion_count": "5"})];
        let primary_before = primary.clone();
        let secondary_before = secondary.clone();

        let _ = join_series(&primary, &secondary, "date", "average_temp", "motion_count");

        assert_eq!(primary, primary_before);
        assert_eq!(secondary, secondary_before);
    }
}
