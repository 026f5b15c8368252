use serde::{Deserialize, Serialize};

use super::coerce;
use super::error::AppError;
use super::metric::Metric;

/// One timestamped measurement record from the hourly sensor feed.
///
/// Numeric fields may arrive as strings depending on the feed; unparsable
/// values land at `0.0` through permissive coercion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub time: String,
    #[serde(default, deserialize_with = "coerce::number_or_string")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "coerce::number_or_string")]
    pub humidity: f64,
    #[serde(default, deserialize_with = "coerce::number_or_string")]
    pub light: f64,
    #[serde(default, deserialize_with = "coerce::number_or_string")]
    pub co2: f64,
}

impl Reading {
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Light => self.light,
            Metric::Co2 => self.co2,
        }
    }
}

/// Ordered readings from one refresh, in feed order.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSeries {
    data: Vec<Reading>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl ReadingSeries {
    pub const fn new(data: Vec<Reading>) -> Self {
        Self { data }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The most recent reading, by feed order.
    pub fn latest(&self) -> Option<&Reading> {
        self.data.last()
    }

    pub fn stats(&self, metric: Metric) -> Result<MetricStats, AppError> {
        if self.data.is_empty() {
            return Err(AppError::DataError("No data available".to_string()));
        }

        let values: Vec<f64> = self.data.iter().map(|r| r.value(metric)).collect();

        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let sum: f64 = values.iter().sum();
        let avg = sum / values.len() as f64;

        Ok(MetricStats { min, max, avg })
    }

    /// x/y pairs for one metric, in feed order.
    pub fn series_data(&self, metric: Metric) -> (Vec<String>, Vec<f64>) {
        let x_data: Vec<String> = self.data.iter().map(|r| r.time.clone()).collect();
        let y_data: Vec<f64> = self.data.iter().map(|r| r.value(metric)).collect();
        (x_data, y_data)
    }

    /// Time labels shared by every metric of the series.
    pub fn time_labels(&self) -> Vec<String> {
        self.data.iter().map(|r| r.time.clone()).collect()
    }
}
