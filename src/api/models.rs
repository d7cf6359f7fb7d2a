use serde::{Deserialize, Serialize};

pub const RAPIDAPI_HOST: &str = "youtube-mp36.p.rapidapi.com";

/// Credentials and endpoint for the conversion service. The host and base
/// URL are fixed in production; tests point `base_url` at a local mock.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_host: RAPIDAPI_HOST.to_string(),
            base_url: format!("https://{}", RAPIDAPI_HOST),
        }
    }
}

/// Success payload of the conversion service, as the result panel needs it.
/// The proxy itself relays the raw body and never deserializes into this.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionResult {
    pub link: String,
    pub title: String,
    /// Seconds, fractional.
    pub duration: f64,
    /// Bytes.
    pub filesize: u64,
}

/// Failure payload of the conversion service. The reason has been observed
/// under both `msg` and `error`, so all fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamErrorBody {
    pub msg: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
}

/// Error body the backend sends for failed conversions. 400 replies carry
/// only `error`; 500 replies carry `error` and `status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReply {
    pub error: String,
    pub status: Option<String>,
}

/// A backend reply as the presentation layer sees it: a relayed conversion
/// payload, an error body, or anything else the proxy passed through
/// (e.g. a still-processing notice without a link).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProxyReply {
    Success(ConversionResult),
    Failure(ErrorReply),
    Unrecognized(serde_json::Value),
}
