use std::time::Duration;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error, warn};

use crate::config::{square_image_size, DevlogConfig, DEFAULT_IMAGE_SIZE};

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Assistant message; content is null for refusals and tool calls
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest
{   pub model: String
  , pub prompt: String
  , pub n: u32
  , pub size: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse
{   #[serde(default)]
    pub data: Vec<ImageData>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData
{   #[serde(default)]
    pub url: Option<String>
  , #[serde(default)]
    pub revised_prompt: Option<String>
}

// ===== OpenAI Client =====

/// HTTP client for OpenAI-compatible chat and image endpoints
#[derive(Debug, Clone)]
pub struct OpenAiClient
{   http_client: reqwest::Client
  , api_base: String
  , text_model: String
  , image_model: String
  , image_size: String
}

impl OpenAiClient
{   /// Create a client from configuration
    pub fn new(config: &DevlogConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenAiClient for {}", config.api_base);
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::HttpError(e.to_string())
        })?;

        let image_size = square_image_size(&config.image_size)
          .unwrap_or_else(|| {
            warn!(
              "Image size {} is not square, using {}"
            , config.image_size
            , DEFAULT_IMAGE_SIZE
            );
            DEFAULT_IMAGE_SIZE.to_string()
          });

        Ok(OpenAiClient
        {   http_client
          , api_base: config.api_base.trim_end_matches('/').to_string()
          , text_model: config.text_model.clone()
          , image_model: config.image_model.clone()
          , image_size
        })
    }

    async fn post_json<Req, Resp>(
      &self
    , path: &str
    , api_key: &str
    , body: &Req
    ) -> Result<Resp, crate::error::Error>
    where
      Req: Serialize + std::fmt::Debug
    , Resp: for<'de> Deserialize<'de>
    {   trace!("OpenAI request to {}: {:?}", path, body);

        let response = self.http_client
          .post(format!("{}{}", self.api_base, path))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(crate::error::Error::ApiError(
              format!("{}: {}", status.as_u16(), error_text)
            ));
        }

        response.json().await.map_err(|e| {
          error!("Parse error: {}", e);
          crate::error::Error::ParseError(e.to_string())
        })
    }
}

#[async_trait]
impl crate::providers::GenerationProvider for OpenAiClient
{   async fn complete_chat(
      &self
    , api_key: &str
    , messages: Vec<ChatMessage>
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "Sending {} messages to {}",
          messages.len(),
          self.text_model
        );

        let request = ChatCompletionRequest
        {   model: self.text_model.clone()
          , messages
        };

        let chat_response: ChatCompletionResponse = self
          .post_json("/chat/completions", api_key, &request)
          .await?;

        chat_response.choices
          .into_iter()
          .next()
          .and_then(|c| {
            trace!("Finish reason: {:?}", c.finish_reason);
            c.message.content
          })
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })
    }

    async fn generate_image(
      &self
    , api_key: &str
    , prompt: &str
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "Requesting {} image from {}",
          self.image_size,
          self.image_model
        );

        let request = ImageGenerationRequest
        {   model: self.image_model.clone()
          , prompt: prompt.to_string()
          , n: 1
          , size: self.image_size.clone()
        };

        let image_response: ImageGenerationResponse = self
          .post_json("/images/generations", api_key, &request)
          .await?;

        image_response.data
          .into_iter()
          .next()
          .and_then(|d| {
            trace!("Revised image prompt: {:?}", d.revised_prompt);
            d.url
          })
          .ok_or_else(|| {
            error!("No images in response");
            crate::error::Error::NoImagesInResponse
          })
    }
}
