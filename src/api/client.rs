use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use super::models::{ApiConfig, UpstreamErrorBody};
use crate::domain::VideoId;

const GENERIC_FAILURE: &str = "RapidAPI request failed";
const GENERIC_STATUS: &str = "error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {message} (status: {status})")]
    Upstream { message: String, status: String },
}

impl ApiError {
    /// Collapse to the `{ error, status }` pair the proxy answers with
    /// when the upstream call fails.
    pub fn normalized(self) -> (String, String) {
        match self {
            ApiError::Upstream { message, status } => (message, status),
            ApiError::Request(_) => (GENERIC_FAILURE.to_string(), GENERIC_STATUS.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Request a conversion for `video_id`. A 2xx reply comes back as raw
    /// JSON so the caller can relay it unchanged; anything else is reduced
    /// to a message/status pair, preferring the body's `msg` over `error`.
    pub async fn convert(&self, video_id: &VideoId) -> Result<Value> {
        let url = format!("{}/dl", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("id", video_id.as_str())])
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .send()
            .await?;

        if response.status().is_success() {
            let body: Value = response.json().await?;
            return Ok(body);
        }

        // Failure bodies are not guaranteed to be JSON.
        let body: UpstreamErrorBody = response.json().await.unwrap_or_default();
        Err(ApiError::Upstream {
            message: body
                .msg
                .or(body.error)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            status: body.status.unwrap_or_else(|| GENERIC_STATUS.to_string()),
        })
    }
}
