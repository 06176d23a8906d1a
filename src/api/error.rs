//! Error types for the predict client.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while requesting a summary.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The service could not be reached.
    #[error("Failed to connect to '{endpoint}': {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The service answered with a non-2xx status.
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not a valid predict response.
    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl PredictError {
    /// Build an error from a transport failure, separating timeouts and
    /// connection failures from the rest.
    pub fn from_transport(err: reqwest::Error, endpoint: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            PredictError::Timeout(timeout)
        } else if err.is_connect() {
            PredictError::Connect {
                endpoint: endpoint.to_string(),
                source: err,
            }
        } else {
            PredictError::Http(err)
        }
    }

    /// Short message shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            PredictError::Connect { .. } => {
                "Could not reach the summarization service".to_string()
            }
            PredictError::Timeout(_) => "The summarization service timed out".to_string(),
            PredictError::Status { status, .. } => {
                format!("The summarization service failed (HTTP {})", status)
            }
            PredictError::Decode(_) => {
                "Unexpected response from the summarization service".to_string()
            }
            PredictError::Http(_) => "Error generating the summary".to_string(),
        }
    }
}
