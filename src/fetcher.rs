//! Web Page Fetcher
//!
//! Loads raw page text for the website analyzer. One attempt per call; a
//! failed fetch is surfaced to the caller unchanged and no prompt is
//! assembled from it.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

use crate::error::{ChatError, ChatResult};

/// Raw text content fetched from one URL
#[derive(Debug, Clone)]
pub struct Document {
    pub source_url: String,
    pub raw_text: String,
    /// Caller bookkeeping only; the core never reads it
    pub fetched_at: DateTime<Utc>,
}

/// Fetches page content over HTTP
#[derive(Debug, Clone)]
pub struct WebFetcher {
    timeout: Duration,
}

impl WebFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch a page as text. Network failures, timeouts and non-2xx
    /// statuses all classify as `ChatError::Fetch`.
    pub async fn fetch(&self, url: &str) -> ChatResult<Document> {
        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ChatError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Fetch(format!("{url} returned {status}")));
        }

        let raw_text = response
            .text()
            .await
            .map_err(|e| ChatError::Fetch(e.to_string()))?;

        debug!("Fetched {} bytes from {}", raw_text.len(), url);

        Ok(Document {
            source_url: url.to_string(),
            raw_text,
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_classifies_as_fetch_error() {
        let fetcher = WebFetcher::new(1);
        // Port 9 (discard) is not listening; connection is refused
        let result = tokio_test::block_on(fetcher.fetch("http://127.0.0.1:9/"));
        assert!(matches!(result, Err(ChatError::Fetch(_))));
    }
}
