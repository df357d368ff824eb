use crate::domain::model::{CompatibilityRequest, CompatibilityResult, HealthStatus};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use reqwest::Client;
use std::time::Duration;

/// Client for the external color-analysis service.
///
/// Each call is a single independent request; concurrent calls are unordered
/// relative to each other and superseded requests are not cancelled.
pub struct CompatibilityClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl CompatibilityClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url(), config.request_timeout_secs())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks two colors against the analysis service and returns its result
    /// verbatim. Any non-2xx status or transport failure becomes a
    /// `ConnectionError`; the upstream status and body are not surfaced.
    pub async fn check(&self, request: &CompatibilityRequest) -> Result<CompatibilityResult> {
        let url = format!("{}/api/analysis/color-compatibility", self.base_url);

        tracing::debug!("📡 Making API request to: {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        tracing::debug!("📡 API response status: {}", response.status());

        if !response.status().is_success() {
            tracing::error!("❌ Compatibility check failed with status: {}", response.status());
            return Err(DemoError::ConnectionError {
                message: "API request failed".to_string(),
            });
        }

        let result: CompatibilityResult = response.json().await?;
        tracing::info!(
            "🎨 Compatibility {} + {}: {:.1}% ({})",
            result.color1,
            result.color2,
            result.compatibility_score * 100.0,
            if result.compatible { "compatible" } else { "not compatible" }
        );
        Ok(result)
    }

    /// Probes the backend health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        tracing::debug!("📡 Health probe: {}", url);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(DemoError::ConnectionError {
                message: "API request failed".to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn check_passes_the_service_result_through_unchanged() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/analysis/color-compatibility")
                .json_body(serde_json::json!({
                    "color1": "#FF0000",
                    "color2": "#00FF00"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "color1": "#FF0000",
                    "color2": "#00FF00",
                    "compatibility_score": 0.82,
                    "compatible": true
                }));
        });

        let client = CompatibilityClient::new(server.base_url(), 10);
        let request = CompatibilityRequest::new("#FF0000", "#00FF00");
        let result = client.check(&request).await.unwrap();

        api_mock.assert();
        assert_eq!(
            result,
            CompatibilityResult {
                color1: "#FF0000".to_string(),
                color2: "#00FF00".to_string(),
                compatibility_score: 0.82,
                compatible: true,
            }
        );
    }

    #[tokio::test]
    async fn hex_hints_are_sent_when_provided() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/analysis/color-compatibility")
                .json_body(serde_json::json!({
                    "color1": "navy",
                    "color2": "coral",
                    "hex1": "#000080",
                    "hex2": "#FF7F50"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "color1": "navy",
                    "color2": "coral",
                    "compatibility_score": 0.74,
                    "compatible": true
                }));
        });

        let client = CompatibilityClient::new(server.base_url(), 10);
        let request = CompatibilityRequest::new("navy", "coral").with_hex("#000080", "#FF7F50");
        let result = client.check(&request).await.unwrap();

        api_mock.assert();
        assert!(result.compatible);
    }

    #[tokio::test]
    async fn server_error_becomes_a_generic_connection_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/analysis/color-compatibility");
            then.status(500);
        });

        let client = CompatibilityClient::new(server.base_url(), 10);
        let request = CompatibilityRequest::new("#FF0000", "#00FF00");
        let err = client.check(&request).await.unwrap_err();

        api_mock.assert();
        match err {
            DemoError::ConnectionError { message } => {
                assert_eq!(message, "API request failed");
                // The status code is deliberately not surfaced
                assert!(!message.contains("500"));
            }
            other => panic!("expected ConnectionError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host_carries_the_transport_error() {
        // Nothing listens on the discard port
        let client = CompatibilityClient::new("http://127.0.0.1:9", 2);
        let request = CompatibilityRequest::new("#FF0000", "#00FF00");
        let err = client.check(&request).await.unwrap_err();

        match err {
            DemoError::ConnectionError { message } => {
                assert!(
                    message.contains("error sending request"),
                    "unexpected transport message: {}",
                    message
                );
            }
            other => panic!("expected ConnectionError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn health_probe_reports_the_service() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "healthy",
                    "service": "Modelo API"
                }));
        });

        let client = CompatibilityClient::new(server.base_url(), 10);
        let health = client.health().await.unwrap();

        api_mock.assert();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "Modelo API");
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = CompatibilityClient::new("http://localhost:8000/", 10);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
