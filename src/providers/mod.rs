//! LLM provider implementations

use async_trait::async_trait;

pub mod openai;

// Re-export for convenience
pub use openai::{ChatMessage, OpenAiClient};

/// Remote text and image generation used by the orchestrator
#[async_trait]
pub trait GenerationProvider: Send + Sync
{   /// Run a chat completion and return the first choice's content
    async fn complete_chat(
      &self
    , api_key: &str
    , messages: Vec<ChatMessage>
    ) -> Result<String, crate::error::Error>;

    /// Generate one image and return its URL
    async fn generate_image(
      &self
    , api_key: &str
    , prompt: &str
    ) -> Result<String, crate::error::Error>;
}
