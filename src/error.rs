use std::fmt;

/// Custom error type for devlog operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API credential configured
    MissingApiKey
  , /// Input text is empty
    EmptyInput
  , /// Text or image generation failed
    GenerationFailed
  , /// A generation is already in flight
    Busy
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in chat completion response
    NoChoicesInResponse
  , /// No images in image generation response
    NoImagesInResponse
  , /// Generic error
    Other(String)
}

impl Error
{   /// Message shown to the user by the presentation layer.
    ///
    /// Provider-level variants never reach the user directly; the
    /// orchestrator collapses them into `GenerationFailed`.
    pub fn user_message(&self) -> String
    {   match self
        {   Error::MissingApiKey => {
              "API key is not configured. \
               Set OPENAI_API_KEY in the environment."
                .to_string()
            }
          , Error::EmptyInput => {
              "Please enter a topic or paste some code.".to_string()
            }
          , Error::Busy => {
              "A generation is already in progress.".to_string()
            }
          , Error::Other(msg) => msg.clone()
          , _ => {
              "Something went wrong while generating. \
               Check your API quota and configuration."
                .to_string()
            }
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "Missing API key")
            }
          , Error::EmptyInput => {
              write!(f, "Input is empty")
            }
          , Error::GenerationFailed => {
              write!(f, "Generation failed")
            }
          , Error::Busy => {
              write!(f, "Generation already in progress")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::NoImagesInResponse => {
              write!(f, "API response contained no images")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
