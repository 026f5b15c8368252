use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{error::AppError, reading::Reading};
use crate::services::api::{ApiConfig, classify_error, error_for_status};

/// Request body for the narrative summary generator.
#[derive(Serialize, Debug)]
struct SummaryRequest<'a> {
    data: SummaryData<'a>,
}

#[derive(Serialize, Debug)]
struct SummaryData<'a> {
    temperature: &'a [Reading],
    motion: &'a [Value],
}

#[derive(Deserialize, Debug)]
struct SummaryResponse {
    summary: String,
}

/// Client for the narrative summary endpoint. The generator is an opaque
/// remote call: it receives the loaded series and returns markdown text.
pub struct SummaryClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SummaryClient {
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

    /// Posts the temperature and motion series and returns the generated
    /// markdown summary.
    pub async fn generate(
        &self,
        temperature: &[Reading],
        motion: &[Value],
    ) -> Result<String, AppError> {
        let request = SummaryRequest {
            data: SummaryData { temperature, motion },
        };

        let response = self
            .http
            .post(self.config.summary_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let parsed: SummaryResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(parsed.summary)
    }
}

/// Generates a summary using default configuration.
pub async fn generate_summary(
    temperature: &[Reading],
    motion: &[Value],
) -> Result<String, AppError> {
    SummaryClient::new()?.generate(temperature, motion).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_parsing() {
        let json = r###"{"summary": "## Overnight\nQuiet, **no motion** after 23:00."}"###;
        let parsed: SummaryResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.summary.starts_with("## Overnight"));
    }

    #[test]
    fn test_request_shape() {
        let temperature = vec![Reading {
            time: "14:00".to_string(),
            temperature: 31.2,
            humidity: 58.0,
            light: 900.0,
            co2: 520.0,
        }];
        let motion = vec![json!({"time": "14:00", "motion_count": "4"})];

        let request = SummaryRequest {
            data: SummaryData {
                temperature: &temperature,
                motion: &motion,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["data"]["temperature"][0]["time"], "14:00");
        assert_eq!(value["data"]["motion"][0]["motion_count"], "4");
    }

    #[test]
    fn test_client_creation() {
        assert!(SummaryClient::new().is_ok());
    }
}
