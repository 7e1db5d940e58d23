//! Image Generation Integration
//!
//! Client for the hosted image endpoint used by the image chat mode. The
//! endpoint returns base64-encoded image data which is decoded to raw bytes
//! before being handed back to the engine.

use async_trait::async_trait;
use base64::Engine as _;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::ImageGenerator;
use crate::config::Config;
use crate::error::{ChatError, ChatResult};

/// Image generations API response
#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: String,
}

/// Handles image generation through the hosted image API
#[derive(Clone)]
pub struct ImageApiClient {
    url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl ImageApiClient {
    /// Create new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.image_api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.image_model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageApiClient {
    /// One attempt per call; failures classify as `ChatError::Generation`.
    async fn generate_image(&self, prompt: &str) -> ChatResult<Vec<u8>> {
        let client = reqwest::Client::new();
        let response = client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "prompt": prompt,
                "response_format": "b64_json",
            }))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ChatError::Generation(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| ChatError::Generation(e.to_string()))?;

        if !status.is_success() {
            warn!("❌ Image API error ({}): {}", status, body_text);
            return Err(ChatError::Generation(format!("API returned {status}")));
        }

        let parsed: ImageResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!("❌ Failed to deserialize image response: {}", e);
            ChatError::Generation(format!("malformed response: {e}"))
        })?;

        let payload = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::Generation("response contained no images".to_string()))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.b64_json.as_bytes())
            .map_err(|e| ChatError::Generation(format!("invalid image payload: {e}")))?;

        debug!("🎨 Image backend returned {} bytes", bytes.len());
        Ok(bytes)
    }
}
