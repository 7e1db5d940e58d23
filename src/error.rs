//! LlamaChat Error Types
//!
//! Centralized error handling for the chat core.

use thiserror::Error;

/// Central error type for LlamaChat
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Invalid mode transition: {0}")]
    State(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for LlamaChat operations
pub type ChatResult<T> = Result<T, ChatError>;
