use serde_json::Value;

use crate::models::{
    error::AppError,
    reading::{Reading, ReadingSeries},
};

// CONSTANTS
const BASE_URL: &str = "http://localhost:4000/api";

// API CONFIGURATION
/// Configuration for the sensor feed client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Hourly environmental readings (temperature, humidity, light, CO2).
    pub fn readings_url(&self) -> String {
        format!("{}/readings", self.base_url)
    }

    /// Temperature aggregated by day.
    pub fn daily_temperature_url(&self) -> String {
        format!("{}/temperature/daily", self.base_url)
    }

    /// Hourly motion events.
    pub fn motion_url(&self) -> String {
        format!("{}/motion", self.base_url)
    }

    /// Motion counts aggregated by day.
    pub fn daily_motion_url(&self) -> String {
        format!("{}/motion/daily", self.base_url)
    }

    /// Narrative summary generator.
    pub fn summary_url(&self) -> String {
        format!("{}/summary", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// SENSOR CLIENT
/// HTTP client for the sensor feed API.
pub struct SensorClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SensorClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the hourly environmental readings.
    pub async fn fetch_readings(&self) -> Result<ReadingSeries, AppError> {
        let readings: Vec<Reading> = self.fetch(&self.config.readings_url()).await?;
        Ok(ReadingSeries::new(readings))
    }

    /// Fetches temperature aggregated by day, as raw feed records.
    ///
    /// Daily aggregates keep their raw JSON shape since field names differ
    /// between deployments; the chart layer joins them by field name.
    pub async fn fetch_daily_temperature(&self) -> Result<Vec<Value>, AppError> {
        self.fetch(&self.config.daily_temperature_url()).await
    }

    /// Fetches the hourly motion events, as raw feed records.
    pub async fn fetch_motion(&self) -> Result<Vec<Value>, AppError> {
        self.fetch(&self.config.motion_url()).await
    }

    /// Fetches motion counts aggregated by day, as raw feed records.
    pub async fn fetch_daily_motion(&self) -> Result<Vec<Value>, AppError> {
        self.fetch(&self.config.daily_motion_url()).await
    }

    /// Executes a single fetch attempt.
    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
pub(crate) fn classify_error(error: &reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
pub(crate) fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches hourly readings using default configuration.
pub async fn fetch_readings() -> Result<ReadingSeries, AppError> {
    SensorClient::new()?.fetch_readings().await
}

/// Fetches daily temperature aggregates using default configuration.
pub async fn fetch_daily_temperature() -> Result<Vec<Value>, AppError> {
    SensorClient::new()?.fetch_daily_temperature().await
}

/// Fetches hourly motion events using default configuration.
pub async fn fetch_motion() -> Result<Vec<Value>, AppError> {
    SensorClient::new()?.fetch_motion().await
}

/// Fetches daily motion aggregates using default configuration.
pub async fn fetch_daily_motion() -> Result<Vec<Value>, AppError> {
    SensorClient::new()?.fetch_daily_motion().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert!(config.readings_url().starts_with(BASE_URL));
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("http://sensors.local/api").build();
        assert_eq!(config.readings_url(), "http://sensors.local/api/readings");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::builder().base_url("http://h").build();
        assert_eq!(config.daily_temperature_url(), "http://h/temperature/daily");
        assert_eq!(config.motion_url(), "http://h/motion");
        assert_eq!(config.daily_motion_url(), "http://h/motion/daily");
        assert_eq!(config.summary_url(), "http://h/summary");
    }

    #[test]
    fn test_error_for_status() {
        let err = error_for_status(reqwest::StatusCode::NOT_FOUND, "missing");
        assert!(matches!(err, AppError::NotFound(_)));

        let err = error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(err.to_string().contains("Server error"));
    }

    #[test]
    fn test_client_creation() {
        assert!(SensorClient::new().is_ok());
    }
}
