//! API client for communicating with the due-diligence backend
//!
//! Provides the single report fetch used by the GUI along with the typed
//! response envelope returned by the backend service.

#![allow(dead_code)]

use serde::Deserialize;
use thiserror::Error;

/// API client for the due-diligence backend
pub struct DiligenceClient {
    base_url: String,
    client: reqwest::Client,
}

impl DiligenceClient {
    /// Create a new client with the default localhost URL
    pub fn new() -> Self {
        Self::with_url("http://127.0.0.1:8000".to_string())
    }

    /// Create a new client with a custom base URL
    pub fn with_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// URL of the due-diligence endpoint for a ticker
    ///
    /// The ticker goes into the path verbatim; format validation is not a
    /// client concern.
    pub fn due_diligence_url(&self, ticker: &str) -> String {
        format!("{}/due_diligence/{}", self.base_url, ticker)
    }

    /// Fetch the generated due-diligence report for a ticker
    pub async fn fetch_due_diligence(
        &self,
        ticker: &str,
    ) -> Result<DueDiligenceResponse, ApiError> {
        let url = self.due_diligence_url(ticker);
        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("due diligence response status: {}", status);
        if !status.is_success() {
            return Err(ApiError::Server(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for DiligenceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Server(u16),
    #[error("invalid response format: {0}")]
    Parse(String),
}

// Response types

/// Top-level response envelope returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct DueDiligenceResponse {
    #[serde(rename = "DD")]
    pub dd: DueDiligenceReport,
}

/// Report payload inside the envelope
///
/// `due_diligence` stays a raw JSON value: the backend sends an object of
/// section name to HTML string, but a payload of another shape must still
/// reach the renderer, which shows it as invalid data instead of failing
/// the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct DueDiligenceReport {
    pub due_diligence: serde_json::Value,
}
