use serde::Deserialize;
use tracing::debug;

use crate::metrics::{MetricsSnapshot, Period, TrendSeries};

/// Failure at the fetch boundary. No retries; a failed fetch is terminal for
/// that render cycle and updates no UI state.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("metrics API error: {0}")]
    Api(String),
    #[error("malformed metrics payload: {0}")]
    DataShape(String),
}

/// Wire envelope shared by both metrics endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, FetchError> {
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| "server reported failure".to_owned());
        return Err(FetchError::Api(message));
    }

    envelope
        .data
        .ok_or_else(|| FetchError::DataShape("successful response without data".to_owned()))
}

fn decode<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<T, FetchError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|err| FetchError::DataShape(err.to_string()))?;
    unwrap_envelope(envelope)
}

/// Read-only client for the metrics API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_snapshot(&self) -> Result<MetricsSnapshot, FetchError> {
        let url = format!("{}/api/metrics/latest", self.base_url);
        debug!(%url, "fetching latest metrics");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        decode(&body)
    }

    pub async fn fetch_trend(&self, period: Period) -> Result<TrendSeries, FetchError> {
        let url = format!("{}/api/metrics/trend/{}", self.base_url, period.as_str());
        debug!(%url, "fetching trend series");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let series: TrendSeries = decode(&body)?;
        series.validate().map_err(FetchError::DataShape)?;
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_successful_snapshot_envelope() {
        let body = br#"{
            "success": true,
            "data": {
                "testing_compliance": 92.5,
                "inspection_compliance": 88.0,
                "coverage_ratio": 85.0,
                "effective_reliability": 80.3,
                "fully_covered": 10,
                "partially_covered": 4,
                "not_covered": 2,
                "inspected": 12,
                "not_inspected": 4,
                "tested": 11,
                "not_tested": 5
            }
        }"#;

        let snapshot: MetricsSnapshot = decode(body).unwrap();
        assert_eq!(snapshot.testing_compliance, 92.5);
        assert_eq!(snapshot.not_covered, 2);
    }

    #[test]
    fn failure_envelope_becomes_api_error() {
        let body = br#"{"success": false, "message": "no metrics recorded yet"}"#;
        let result: Result<MetricsSnapshot, _> = decode(body);

        match result {
            Err(FetchError::Api(message)) => assert_eq!(message, "no metrics recorded yet"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_envelope_without_message_gets_a_default() {
        let body = br#"{"success": false}"#;
        let result: Result<MetricsSnapshot, _> = decode(body);

        match result {
            Err(FetchError::Api(message)) => assert_eq!(message, "server reported failure"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_a_shape_error() {
        let body = br#"{"success": true}"#;
        let result: Result<MetricsSnapshot, _> = decode(body);
        assert!(matches!(result, Err(FetchError::DataShape(_))));
    }

    #[test]
    fn malformed_json_is_a_shape_error() {
        let body = br#"{"success": true, "data": {"#;
        let result: Result<MetricsSnapshot, _> = decode(body);
        assert!(matches!(result, Err(FetchError::DataShape(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
