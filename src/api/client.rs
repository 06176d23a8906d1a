//! Client for the `/predict` endpoint.

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;

use super::error::PredictError;
use super::types::{SummarizeRequest, SummarizeResponse};

/// Client for calling the summarization service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct PredictClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl PredictClient {
    /// Create a new client from config.
    pub fn new(config: &ApiConfig) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
            timeout: config.timeout(),
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a summary for `request`.
    ///
    /// Any non-2xx status is an error; the body is kept for diagnostics.
    pub async fn predict(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, PredictError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            passage_len = request.passage.len(),
            reference_len = request.reference.len(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(
                status = %status,
                body = %body,
                "Summarization service error"
            );

            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        let parsed: SummarizeResponse = serde_json::from_str(&text)?;

        tracing::info!(
            latency_ms = start.elapsed().as_millis() as u64,
            summary_len = parsed.summary.len(),
            has_scores = parsed.rouge_scores.is_some(),
            "Summary received"
        );

        Ok(parsed)
    }

    fn transport_error(&self, err: reqwest::Error) -> PredictError {
        PredictError::from_transport(err, &self.endpoint, self.timeout)
    }
}
