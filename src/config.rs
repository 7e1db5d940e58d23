use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Text generation
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,

    // Image generation
    pub image_api_url: String,
    pub image_model: String,

    // Networking
    pub request_timeout_secs: u64,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: "".to_string(),
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: 0.7,
            image_api_url: "https://api.openai.com/v1/images/generations".to_string(),
            image_model: "dall-e-3".to_string(),
            request_timeout_secs: 30,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, or create default
    ///
    /// The `GROQ_API_KEY` environment variable always wins over the file
    /// value for the API key.
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        let mut config = if config_path.exists() {
            Self::read_from(&config_path)?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("llamachat")
        .join("config.json")
}
