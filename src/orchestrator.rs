//! Sequential, all-or-nothing text + image generation

use log::{debug, error, info};

use crate::providers::{ChatMessage, GenerationProvider};
use crate::request::{GenerationRequest, GenerationResult};

/// Runs one generation: text call, then image call.
///
/// The image call is only issued once the text call has succeeded, and
/// any provider failure collapses into `Error::GenerationFailed`.
pub struct Orchestrator
{   api_key: Option<String>
  , provider: Box<dyn GenerationProvider>
}

impl Orchestrator
{   pub fn new(
      api_key: Option<String>
    , provider: Box<dyn GenerationProvider>
    ) -> Self
    {   Orchestrator
        {   api_key: api_key.filter(|k| !k.is_empty())
          , provider
        }
    }

    pub fn is_configured(&self) -> bool
    {   self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No API key configured");
          crate::error::Error::MissingApiKey
        })
    }

    pub async fn generate(
      &self
    , request: &GenerationRequest
    ) -> Result<GenerationResult, crate::error::Error>
    {   let api_key = self.api_key()?;
        request.validate()?;

        debug!("Generating article in {:?} mode", request.mode);
        let prompts = crate::prompt::build(request);

        let messages = vec![
          ChatMessage::system(prompts.system_instruction)
        , ChatMessage::user(prompts.user_instruction)
        ];

        let article_markdown = self.provider
          .complete_chat(api_key, messages)
          .await
          .map_err(|e| {
            error!("Text generation failed: {}", e);
            crate::error::Error::GenerationFailed
          })?;

        let image_prompt = crate::prompt::image_prompt(&request.raw_input);
        let thumbnail_image_url = self.provider
          .generate_image(api_key, &image_prompt)
          .await
          .map_err(|e| {
            error!("Image generation failed: {}", e);
            crate::error::Error::GenerationFailed
          })?;

        info!(
          "Generated article ({} bytes) and thumbnail",
          article_markdown.len()
        );
        Ok(GenerationResult
        {   article_markdown
          , thumbnail_image_url
        })
    }
}
