use log::{error, info, warn};
use serde_json::Value;

use crate::{
    api::{ApiClient, ApiError},
    domain::{extract_video_id, AppError},
};

/// Runs one conversion request end to end: extract the video id, then a
/// single best-effort call to the conversion API. No retries, no caching.
#[derive(Clone)]
pub struct ConversionCoordinator {
    api_client: ApiClient,
}

impl ConversionCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// The upstream success body is returned as raw JSON so the caller can
    /// relay it without reshaping.
    pub async fn convert(&self, youtube_url: &str) -> Result<Value, AppError> {
        let video_id = extract_video_id(youtube_url).ok_or_else(|| {
            warn!("no video id in {:?}", youtube_url);
            AppError::InvalidUrl
        })?;

        info!("extracted video id: {}", video_id);

        match self.api_client.convert(&video_id).await {
            Ok(body) => {
                info!("conversion ready for {}", video_id);
                Ok(body)
            }
            Err(e) => {
                error!("conversion for {} failed: {}", video_id, e);
                let (message, status) = e.normalized();
                Err(AppError::Upstream { message, status })
            }
        }
    }
}
