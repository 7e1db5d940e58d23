//! Generation Backends
//!
//! Trait seams over the hosted text and image generation services. The
//! engine and tests depend on the traits, not on any particular vendor.

use async_trait::async_trait;

use crate::error::ChatResult;

pub mod groq;
pub mod image_api;

pub use groq::GroqClient;
pub use image_api::ImageApiClient;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a text answer for a rendered prompt
    async fn generate(&self, prompt: &str) -> ChatResult<String>;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate image bytes for a rendered prompt
    async fn generate_image(&self, prompt: &str) -> ChatResult<Vec<u8>>;
}
