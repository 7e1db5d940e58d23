//! Groq Chat Completions Integration
//!
//! Client for the hosted OpenAI-compatible chat completions endpoint used
//! for text answers.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::TextGenerator;
use crate::config::Config;
use crate::error::{ChatError, ChatResult};

/// Chat completions API response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Handles text generation through the hosted chat completions API
#[derive(Clone)]
pub struct GroqClient {
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl GroqClient {
    /// Create new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    /// One attempt per call; auth, rate-limit and malformed-response
    /// failures all classify as `ChatError::Generation`.
    async fn generate(&self, prompt: &str) -> ChatResult<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/chat/completions", self.url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.temperature,
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
            warn!("❌ Chat API error ({}): {}", status, body_text);
            return Err(ChatError::Generation(format!("API returned {status}")));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!("❌ Failed to deserialize chat response: {} - Body: {}", e, body_text);
            ChatError::Generation(format!("malformed response: {e}"))
        })?;

        let answer = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::Generation("response contained no choices".to_string()))?;

        debug!("🧠 Model returned {} chars", answer.len());
        Ok(answer)
    }
}
