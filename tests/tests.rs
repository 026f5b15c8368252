#[cfg(test)]
mod tests {
    use enviro_dashboard::hooks::use_daily::{DailySeries, DailyState};
    use enviro_dashboard::hooks::use_readings::DataState;
    use enviro_dashboard::models::{
        combined::{CombinedRecord, DAILY_JOIN_KEY, join_series},
        error::AppError,
        metric::Metric,
        reading::{Reading, ReadingSeries},
    };
    use enviro_dashboard::services::synth::synthetic_day;
    use serde_json::{Value, json};
    use std::rc::Rc;

    // Helper function to create test readings
    fn create_test_readings() -> Vec<Reading> {
        vec![
            Reading {
                time: "00:00".to_string(),
                temperature: 22.4,
                humidity: 81.0,
                light: 3.0,
                co2: 470.0,
            },
            Reading {
                time: "01:00".to_string(),
                temperature: 21.9,
                humidity: 83.5,
                light: 1.0,
                co2: 465.0,
            },
            Reading {
                time: "02:00".to_string(),
                temperature: 21.2,
                humidity: 85.0,
                light: 2.0,
                co2: 480.0,
            },
        ]
    }

    fn daily_temperatures() -> Vec<Value> {
        vec![
            json!({"date": "01-01", "average_temp": "20.0"}),
            json!({"date": "01-02", "average_temp": "22.5"}),
        ]
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== Reading Model Tests =====

    #[test]
    fn test_reading_deserialization() {
        let json = r#"{
            "time": "14:00",
            "temperature": 31.2,
            "humidity": 58.4,
            "light": 1043,
            "co2": 541
        }"#;

        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.time, "14:00");
        assert_eq!(reading.temperature, 31.2);
        assert_eq!(reading.light, 1043.0);
    }

    #[test]
    fn test_reading_deserialization_with_string_fields() {
        // Some feeds quote their numbers
        let json = r#"{
            "time": "14:00",
            "temperature": "31.2",
            "humidity": "58.4",
            "light": "1043",
            "co2": "541"
        }"#;

        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.temperature, 31.2);
        assert_eq!(reading.co2, 541.0);
    }

    #[test]
    fn test_reading_deserialization_defaults_bad_fields() {
        let json = r#"{"time": "14:00", "temperature": "N/A", "humidity": 58.4}"#;

        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.temperature, 0.0);
        assert_eq!(reading.humidity, 58.4);
        // Missing fields also default
        assert_eq!(reading.light, 0.0);
        assert_eq!(reading.co2, 0.0);
    }

    // ===== ReadingSeries Tests =====

    #[test]
    fn test_series_latest_is_last_by_feed_order() {
        let series = ReadingSeries::new(create_test_readings());
        assert_eq!(series.latest().unwrap().time, "02:00");

        let empty = ReadingSeries::new(vec![]);
        assert!(empty.latest().is_none());
    }

    #[test]
    fn test_series_stats() {
        let series = ReadingSeries::new(create_test_readings());
        let stats = series.stats(Metric::Temperature).unwrap();

        assert_eq!(stats.min, 21.2);
        assert_eq!(stats.max, 22.4);
        assert!((stats.avg - 21.833_333).abs() < 0.001);
    }

    #[test]
    fn test_series_stats_empty_errors() {
        let series = ReadingSeries::new(vec![]);
        assert!(matches!(
            series.stats(Metric::Co2),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_series_data_preserves_feed_order() {
        let series = ReadingSeries::new(create_test_readings());
        let (x_data, y_data) = series.series_data(Metric::Humidity);

        assert_eq!(x_data, vec!["00:00", "01:00", "02:00"]);
        assert_eq!(y_data, vec![81.0, 83.5, 85.0]);
    }

    // ===== Join Tests =====

    #[test]
    fn test_join_output_length_matches_primary() {
        let primary = daily_temperatures();
        let secondary = vec![json!({"date": "01-01", "motion_count": "5"})];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(result.len(), primary.len());
    }

    #[test]
    fn test_join_matches_and_defaults() {
        let primary = daily_temperatures();
        let secondary = vec![json!({"date": "01-01", "motion_count": "5"})];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(
            result,
            vec![
                CombinedRecord {
                    key: "01-01".to_string(),
                    primary: 20.0,
                    secondary: 5.0,
                },
                CombinedRecord {
                    key: "01-02".to_string(),
                    primary: 22.5,
                    secondary: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_join_empty_secondary_defaults_all() {
        let primary = daily_temperatures();

        let result = join_series(&primary, &[], DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.secondary == 0.0));
    }

    #[test]
    fn test_join_preserves_primary_order() {
        // Deliberately unsorted; feed order is not time order
        let primary = vec![
            json!({"date": "01-03", "average_temp": "19.0"}),
            json!({"date": "01-01", "average_temp": "20.0"}),
            json!({"date": "01-02", "average_temp": "22.5"}),
        ];
        let secondary = vec![
            json!({"date": "01-02", "motion_count": "7"}),
            json!({"date": "01-03", "motion_count": "2"}),
        ];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        let keys: Vec<&str> = result.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["01-03", "01-01", "01-02"]);
        assert_eq!(result[0].secondary, 2.0);
        assert_eq!(result[1].secondary, 0.0);
        assert_eq!(result[2].secondary, 7.0);
    }

    #[test]
    fn test_join_first_duplicate_wins() {
        let primary = vec![json!({"date": "01-01", "average_temp": "20.0"})];
        let secondary = vec![
            json!({"date": "01-01", "motion_count": "5"}),
            json!({"date": "01-01", "motion_count": "9"}),
        ];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(result[0].secondary, 5.0);
    }

    #[test]
    fn test_join_unmatched_secondary_is_dropped() {
        let primary = vec![json!({"date": "01-01", "average_temp": "20.0"})];
        let secondary = vec![
            json!({"date": "01-01", "motion_count": "5"}),
            json!({"date": "12-31", "motion_count": "99"}),
        ];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(result.len(), 1);
        assert!(!result.iter().any(|r| r.secondary == 99.0));
    }

    #[test]
    fn test_join_coerces_malformed_values_to_zero() {
        // Degrading bad data to zero keeps the chart rendering; absence and
        // zero are indistinguishable here, which is acceptable for display
        let primary = vec![json!({"date": "01-01", "average_temp": "oops"})];
        let secondary = vec![json!({"date": "01-01", "motion_count": null})];

        let result = join_series(&primary, &secondary, DAILY_JOIN_KEY, "average_temp", "motion_count");
        assert_eq!(result[0].primary, 0.0);
        assert_eq!(result[0].secondary, 0.0);
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let series = Rc::new(ReadingSeries::new(create_test_readings()));
        let loaded = DataState::Loaded(series.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &series);

        let loading = DataState::Loading;
        assert!(loading.data().is_none());
        assert!(loading.is_loading());

        let error = DataState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_daily_state_data_extraction() {
        let daily = Rc::new(DailySeries {
            temperature: daily_temperatures(),
            motion: vec![json!({"date": "01-01", "motion_count": "5"})],
        });

        let loaded = DailyState::Loaded(daily.clone());
        assert_eq!(loaded.data().unwrap().temperature.len(), 2);

        assert!(DailyState::Loading.data().is_none());
        assert!(DailyState::Error("boom".to_string()).data().is_none());
    }

    #[test]
    fn test_data_state_equality() {
        assert_eq!(DataState::Loading, DataState::Loading);
        assert_eq!(
            DataState::Error("Test error".to_string()),
            DataState::Error("Test error".to_string())
        );

        let series1 = Rc::new(ReadingSeries::new(create_test_readings()));
        let series2 = Rc::new(ReadingSeries::new(create_test_readings()));
        assert_eq!(DataState::Loaded(series1), DataState::Loaded(series2));
    }

    // ===== Synthetic Fallback Tests =====

    #[test]
    fn test_synthetic_day_joins_cleanly_with_itself() {
        // The fallback series must work through the same chart paths as
        // fetched data
        let series = synthetic_day(11);
        assert_eq!(series.len(), 24);

        let (x_data, y_data) = series.series_data(Metric::Light);
        assert_eq!(x_data.len(), y_data.len());
        assert!(series.stats(Metric::Temperature).is_ok());
    }
}
