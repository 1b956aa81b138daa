//! Configuration for the generation backend

use std::fmt;
use serde::{Deserialize, Serialize};
use log::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// devlog configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DevlogConfig
{   /// API credential; never serialized
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>
  , /// API base URL
    pub api_base: String
  , /// Chat completion model
    pub text_model: String
  , /// Image generation model
    pub image_model: String
  , /// Square image resolution, e.g. "1024x1024"
    pub image_size: String
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
}

/// Normalized `NxN` size string, or `None` if the value is not square
pub fn square_image_size(value: &str) -> Option<String>
{   let (width, height) = value.trim().split_once('x')?;
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;
    if width == 0 || width != height
    {   return None;
    }
    Some(format!("{}x{}", width, height))
}

impl Default for DevlogConfig
{   fn default() -> Self
    {   DevlogConfig
        {   api_key: None
          , api_base: DEFAULT_API_BASE.to_string()
          , text_model: DEFAULT_TEXT_MODEL.to_string()
          , image_model: DEFAULT_IMAGE_MODEL.to_string()
          , image_size: DEFAULT_IMAGE_SIZE.to_string()
          , timeout_secs: None
        }
    }
}

impl fmt::Debug for DevlogConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("DevlogConfig")
          .field(
            "api_key"
          , &self.api_key.as_ref().map(|_| "[REDACTED]")
          )
          .field("api_base", &self.api_base)
          .field("text_model", &self.text_model)
          .field("image_model", &self.image_model)
          .field("image_size", &self.image_size)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

impl DevlogConfig
{   /// Build configuration from process environment
    pub fn from_env() -> Self
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String>
    {   let read = |name: &str| {
          lookup(name).filter(|v| !v.is_empty())
        };

        let defaults = DevlogConfig::default();
        let config = DevlogConfig
        {   api_key: read(API_KEY_VAR)
          , api_base: read("DEVLOG_API_BASE")
              .unwrap_or(defaults.api_base)
          , text_model: read("DEVLOG_TEXT_MODEL")
              .unwrap_or(defaults.text_model)
          , image_model: read("DEVLOG_IMAGE_MODEL")
              .unwrap_or(defaults.image_model)
          , image_size: read("DEVLOG_IMAGE_SIZE")
              .and_then(|v| {
                let size = square_image_size(&v);
                if size.is_none()
                {   warn!(
                      "Ignoring DEVLOG_IMAGE_SIZE={}: not a square NxN size"
                    , v
                    );
                }
                size
              })
              .unwrap_or(defaults.image_size)
          , timeout_secs: read("DEVLOG_TIMEOUT_SECS")
              .and_then(|v| match v.parse::<u64>()
              {   Ok(secs) => Some(secs)
                , Err(e) => {
                    warn!(
                      "Ignoring DEVLOG_TIMEOUT_SECS={}: {}", v, e
                    );
                    None
                  }
              })
        };
        debug!("Loaded config: {:?}", config);
        config
    }

    /// Set the API credential
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self
    {   self.api_key = Some(key.into());
        self
    }

    /// Whether a usable credential is present
    pub fn has_api_key(&self) -> bool
    {   self.api_key
          .as_deref()
          .is_some_and(|k| !k.is_empty())
    }
}
